//! Shubert 3 test function

use ndarray::Array1;

use crate::metadata::{
    Arity, AtInfinity, FunctionMetadata, LiteratureNote, MinValue, Point, Property,
};
use crate::{Benchmark, Scalar};

/// Shubert 3 function - N-dimensional, separable multimodal
/// Global minimum: f(x) = -14.83795002571059 n at x = (-1.1140996875818520, ...)
/// Bounds: x_i in [-10, 10]
///
/// The survey value -29.6733337 is a two-dimensional figure that Newton
/// refinement improves to 2 * -14.83795002571059 = -29.67590005142118.
pub struct Shubert3;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "shubert3",
    description: "Separable sum of five sine harmonics per coordinate",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} \sum_{j=1}^{5} j \sin\left((j+1) x_i + j\right)",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fill(0.0),
    min_position: Point::Fill(-1.114099687581852),
    min_value: MinValue::PerDimension(-14.83795002571059),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::Scalable,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: Some(LiteratureNote {
        reported_value: -29.6733337,
        reported_position: &[],
        remark: "survey reports -29.6733337 for n = 2 without a unique minimizer; \
                 the refined per-coordinate minimum is -14.83795002571059",
    }),
};

impl Benchmark for Shubert3 {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter().fold(T::zero(), |acc, &xi| {
            (1..=5).fold(acc, |inner, j| {
                let jf = T::idx(j);
                inner + jf * ((jf + T::one()) * xi + jf).sin()
            })
        })
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        x.mapv(|xi| {
            (1..=5).fold(T::zero(), |acc, j| {
                let jf = T::idx(j);
                acc + jf * (jf + T::one()) * ((jf + T::one()) * xi + jf).cos()
            })
        })
    }
}

//! Qing test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Qing function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x_i = ±sqrt(i)
/// Bounds: x_i in [-500, 500]
pub struct Qing;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "qing",
    description: "Separable quartic with 2^n global minima at x_i = ±sqrt(i)",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} \left(x_i^2 - i\right)^2",
    source: "Qing (2006), Dynamic Differential Evolution Strategy and Applications in Electromagnetic Inverse Scattering Problems",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-500.0),
    upper_bound: Point::Fill(500.0),
    start: Point::Fill(2.5),
    min_position: Point::Generated(minimizer),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonConvex,
        Property::Scalable,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

fn minimizer(n: usize) -> Vec<f64> {
    (1..=n).map(|i| (i as f64).sqrt()).collect()
}

impl Benchmark for Qing {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, &xi)| acc + (xi * xi - T::idx(i + 1)).powi(2))
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        Array1::from_shape_fn(x.len(), |i| {
            T::lit(4.0) * x[i] * (x[i] * x[i] - T::idx(i + 1))
        })
    }
}

//! Schwefel test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Offset making the minimum exactly zero: max over x of x sin(sqrt|x|).
const OFFSET: f64 = 418.9828872724338;

/// Schwefel function - N-dimensional, deceptive multimodal
/// Global minimum: f(x) = 0 at x = (420.968746, ..., 420.968746)
/// Bounds: x_i in [-500, 500]
///
/// The second-best minimum lies far from the global one, near the
/// opposite corner of the domain.
pub struct Schwefel;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "schwefel",
    description: "Deceptive multimodal function whose optimum sits near the domain corner",
    math: r"f(\mathbf{x}) = 418.9829\,n - \sum_{i=1}^{n} x_i \sin\left(\sqrt{|x_i|}\right)",
    source: "Schwefel (1981), Numerical Optimization of Computer Models",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-500.0),
    upper_bound: Point::Fill(500.0),
    start: Point::Fill(1.0),
    min_position: Point::Fill(420.968746359982),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Deceptive,
        Property::Differentiable,
        Property::Multimodal,
        Property::Scalable,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Schwefel {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let n = T::idx(x.len());
        let sum = x
            .iter()
            .fold(T::zero(), |acc, &xi| acc + xi * xi.abs().sqrt().sin());
        T::lit(OFFSET) * n - sum
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        // d/dx [x sin(sqrt|x|)] = sin(s) + s cos(s) / 2 with s = sqrt|x|,
        // which is continuous through x = 0
        x.mapv(|xi| {
            let s = xi.abs().sqrt();
            -(s.sin() + T::lit(0.5) * s * s.cos())
        })
    }
}

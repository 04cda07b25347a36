//! Chung Reynolds test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Chung Reynolds function - N-dimensional, convex quartic
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub struct ChungReynolds;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "chung_reynolds",
    description: "Square of the sphere function; flat near the optimum",
    math: r"f(\mathbf{x}) = \left(\sum_{i=1}^{n} x_i^2\right)^2",
    source: "Chung & Reynolds (1998), CAEP: An Evolution-Based Tool for Real-Valued Function Optimization Using Cultural Algorithms",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-100.0),
    upper_bound: Point::Fill(100.0),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::Differentiable,
        Property::PartiallySeparable,
        Property::Scalable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for ChungReynolds {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi).powi(2)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        x.mapv(|xi| T::lit(4.0) * sum_sq * xi)
    }
}

//! Exponential test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Exponential function - N-dimensional, unimodal Gaussian well
/// Global minimum: f(x) = -1 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
///
/// Tends to 0 as any coordinate goes to infinity, so infinite input
/// evaluates to 0 with a zero gradient.
pub struct Exponential;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "exponential",
    description: "Inverted Gaussian bell, flat far from the origin",
    math: r"f(\mathbf{x}) = -\exp\left(-\frac{1}{2}\sum_{i=1}^{n} x_i^2\right)",
    source: "Rahnamayan, Tizhoosh & Salama (2007), Opposition-Based Differential Evolution",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-1.0),
    upper_bound: Point::Fill(1.0),
    start: Point::Fill(0.5),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(-1.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::FiniteAtInf,
        Property::NonSeparable,
        Property::Scalable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::Limit(0.0),
    literature: None,
};

impl Benchmark for Exponential {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        -(-T::lit(0.5) * sum_sq).exp()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        let bell = (-T::lit(0.5) * sum_sq).exp();
        x.mapv(|xi| xi * bell)
    }
}

//! Dixon-Price test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Dixon-Price function - N-dimensional, unimodal valley
/// Global minimum: f(x) = 0 at x_i = 2^(-(2^i - 2) / 2^i)
/// Bounds: x_i in [-10, 10]
pub struct DixonPrice;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "dixon_price",
    description: "Chained quadratic valley whose minimizer has distinct coordinates",
    math: r"f(\mathbf{x}) = (x_1 - 1)^2 + \sum_{i=2}^{n} i \left(2x_i^2 - x_{i-1}\right)^2",
    source: "Dixon & Price (1989), Truncated Newton Method for Sparse Unconstrained Optimization",
    arity: Arity::Scalable { min: 2, default: 2 },
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fill(2.0),
    min_position: Point::Generated(minimizer),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::NonSeparable,
        Property::Scalable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

fn minimizer(n: usize) -> Vec<f64> {
    (1..=n)
        .map(|i| {
            let p = 2.0_f64.powi(i as i32);
            2.0_f64.powf(-(p - 2.0) / p)
        })
        .collect()
}

impl Benchmark for DixonPrice {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let head = (x[0] - T::one()).powi(2);
        (1..x.len()).fold(head, |acc, k| {
            let t = T::lit(2.0) * x[k] * x[k] - x[k - 1];
            acc + T::idx(k + 1) * t * t
        })
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let mut grad = Array1::zeros(x.len());
        grad[0] = T::lit(2.0) * (x[0] - T::one());
        for k in 1..x.len() {
            let weight = T::idx(k + 1);
            let t = T::lit(2.0) * x[k] * x[k] - x[k - 1];
            grad[k] = grad[k] + T::lit(8.0) * weight * t * x[k];
            grad[k - 1] = grad[k - 1] - T::lit(2.0) * weight * t;
        }
        grad
    }
}

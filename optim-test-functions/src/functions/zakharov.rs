//! Zakharov test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Zakharov function - N-dimensional, unimodal plate-shaped
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 10]
pub struct Zakharov;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "zakharov",
    description: "Convex function with a weighted linear coupling term raised to powers two and four",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} x_i^2 + \left(\sum_{i=1}^{n} 0.5 i x_i\right)^2 + \left(\sum_{i=1}^{n} 0.5 i x_i\right)^4",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-5.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::Differentiable,
        Property::NonSeparable,
        Property::Scalable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

/// sum of 0.5 i x_i with 1-based i
fn weighted_sum<T: Scalar>(x: &Array1<T>) -> T {
    x.iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, &xi)| acc + T::lit(0.5) * T::idx(i + 1) * xi)
}

impl Benchmark for Zakharov {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        let s = weighted_sum(x);
        sum_sq + s.powi(2) + s.powi(4)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let s = weighted_sum(x);
        let coupling = s + T::lit(2.0) * s.powi(3);
        Array1::from_shape_fn(x.len(), |i| T::lit(2.0) * x[i] + T::idx(i + 1) * coupling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zakharov_values() {
        assert_eq!(Zakharov::evaluate(&Array1::<f64>::from_vec(vec![0.0, 0.0])), Ok(0.0));

        // s = 0.5 + 1 = 1.5
        let x = Array1::<f64>::from_vec(vec![1.0, 1.0]);
        let expected = 2.0 + 1.5_f64.powi(2) + 1.5_f64.powi(4);
        assert!((Zakharov::evaluate(&x).unwrap() - expected).abs() < 1e-12);

        let grad = Zakharov::gradient(&x).unwrap();
        let coupling = 1.5 + 2.0 * 1.5_f64.powi(3);
        assert!((grad[0] - (2.0 + coupling)).abs() < 1e-12);
        assert!((grad[1] - (2.0 + 2.0 * coupling)).abs() < 1e-12);
    }
}

//! Bukin N.6 test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::sign;
use crate::{Benchmark, Scalar};

/// Bukin N.6 function - 2D, narrow non-smooth ridge
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
///
/// Not differentiable on the parabola x2 = 0.01 x1^2 nor on x1 = -10; the
/// gradient is NaN on both.
pub struct Bukin6;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "bukin6",
    description: "Square-root ridge along a parabola; every point of the ridge is a local minimum",
    math: r"f(\mathbf{x}) = 100\sqrt{|x_2 - 0.01 x_1^2|} + 0.01 |x_1 + 10|",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fixed(&[-15.0, -3.0]),
    upper_bound: Point::Fixed(&[-5.0, 3.0]),
    start: Point::Fixed(&[-12.0, 2.0]),
    min_position: Point::Fixed(&[-10.0, 1.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Bukin6 {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let ridge = x[1] - T::lit(0.01) * x[0].powi(2);
        T::lit(100.0) * ridge.abs().sqrt() + T::lit(0.01) * (x[0] + T::lit(10.0)).abs()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let ridge = x[1] - T::lit(0.01) * x[0].powi(2);
        let shifted = x[0] + T::lit(10.0);
        if ridge == T::zero() || shifted == T::zero() {
            return Array1::from_elem(2, T::nan());
        }
        // d/du 100 sqrt|u|
        let outer = T::lit(50.0) * sign(ridge) / ridge.abs().sqrt();
        Array1::from_vec(vec![
            outer * (-T::lit(0.02) * x[0]) + T::lit(0.01) * sign(shifted),
            outer,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bukin6_minimum() {
        let x = Array1::<f64>::from_vec(vec![-10.0, 1.0]);
        assert_eq!(Bukin6::evaluate(&x), Ok(0.0));
        assert!(Bukin6::gradient(&x).unwrap().iter().all(|g| g.is_nan()));
    }

    #[test]
    fn test_bukin6_ridge_points_are_flat_in_value() {
        // on the ridge only the |x1 + 10| term remains
        let x = Array1::<f64>::from_vec(vec![-5.0, 0.25]);
        assert!((Bukin6::evaluate(&x).unwrap() - 0.05).abs() < 1e-12);
        assert!(Bukin6::gradient(&x).unwrap()[0].is_nan());
    }
}

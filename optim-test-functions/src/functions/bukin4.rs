//! Bukin N.4 test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::sign;
use crate::{Benchmark, Scalar};

/// Bukin N.4 function - 2D, parabolic ridge with a kink at x1 = -10
/// Global minimum: f(x) = 0 at x = (-10, 0)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
///
/// The gradient is undefined on the line x1 = -10, including the minimum,
/// and is reported as NaN there.
pub struct Bukin4;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "bukin4",
    description: "Quadratic valley in x2 with an absolute-value kink in x1",
    math: r"f(\mathbf{x}) = 100 x_2^2 + 0.01 |x_1 + 10|",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fixed(&[-15.0, -3.0]),
    upper_bound: Point::Fixed(&[-5.0, 3.0]),
    start: Point::Fixed(&[-12.0, 1.0]),
    min_position: Point::Fixed(&[-10.0, 0.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::PartiallyDifferentiable,
        Property::Separable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Bukin4 {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        T::lit(100.0) * x[1].powi(2) + T::lit(0.01) * (x[0] + T::lit(10.0)).abs()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let shifted = x[0] + T::lit(10.0);
        if shifted == T::zero() {
            return Array1::from_elem(2, T::nan());
        }
        Array1::from_vec(vec![T::lit(0.01) * sign(shifted), T::lit(200.0) * x[1]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bukin4_minimum_is_a_kink() {
        let x = Array1::<f64>::from_vec(vec![-10.0, 0.0]);
        assert_eq!(Bukin4::evaluate(&x), Ok(0.0));
        assert!(Bukin4::gradient(&x).unwrap().iter().all(|g| g.is_nan()));
    }

    #[test]
    fn test_bukin4_gradient_off_the_kink() {
        let x = Array1::<f64>::from_vec(vec![-12.0, 0.5]);
        assert_eq!(Bukin4::gradient(&x).unwrap().to_vec(), vec![-0.01, 100.0]);
    }
}

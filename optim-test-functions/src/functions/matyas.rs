//! Matyas test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Matyas function - 2D, plate-shaped convex quadratic
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-10, 10]
pub struct Matyas;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "matyas",
    description: "Weakly coupled quadratic with a nearly flat valley along x1 = x2",
    math: r"f(\mathbf{x}) = 0.26(x_1^2 + x_2^2) - 0.48 x_1 x_2",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[1.0, 2.0]),
    min_position: Point::Fixed(&[0.0, 0.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::Differentiable,
        Property::NonSeparable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Matyas {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        T::lit(0.26) * (x[0] * x[0] + x[1] * x[1]) - T::lit(0.48) * x[0] * x[1]
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        Array1::from_vec(vec![
            T::lit(0.52) * x[0] - T::lit(0.48) * x[1],
            T::lit(0.52) * x[1] - T::lit(0.48) * x[0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matyas_known_properties() {
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert_eq!(Matyas::evaluate(&x), Ok(0.0));

        // shallow along the diagonal
        let x = Array1::<f64>::from_vec(vec![1.0, 1.0]);
        assert!((Matyas::evaluate(&x).unwrap() - 0.04).abs() < 1e-12);
    }
}

//! Colville test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Colville function - 4D, two coupled Rosenbrock valleys
/// Global minimum: f(x) = 0 at x = (1, 1, 1, 1)
/// Bounds: x_i in [-10, 10]
pub struct Colville;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "colville",
    description: "Two Rosenbrock-like valleys joined by a bilinear coupling term",
    math: r"f(\mathbf{x}) = 100(x_1^2 - x_2)^2 + (x_1 - 1)^2 + (x_3 - 1)^2 + 90(x_3^2 - x_4)^2 + 10.1\left[(x_2 - 1)^2 + (x_4 - 1)^2\right] + 19.8(x_2 - 1)(x_4 - 1)",
    source: "Colville (1968), A Comparative Study on Nonlinear Programming Codes",
    arity: Arity::Fixed(4),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[0.0, 0.0, 0.0, 0.0]),
    min_position: Point::Fixed(&[1.0, 1.0, 1.0, 1.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Colville {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let c = T::lit;
        let one = T::one();
        let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
        c(100.0) * (x1 * x1 - x2).powi(2)
            + (x1 - one).powi(2)
            + (x3 - one).powi(2)
            + c(90.0) * (x3 * x3 - x4).powi(2)
            + c(10.1) * ((x2 - one).powi(2) + (x4 - one).powi(2))
            + c(19.8) * (x2 - one) * (x4 - one)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let c = T::lit;
        let one = T::one();
        let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
        let upper = x1 * x1 - x2;
        let lower = x3 * x3 - x4;
        Array1::from_vec(vec![
            c(400.0) * x1 * upper + c(2.0) * (x1 - one),
            c(-200.0) * upper + c(20.2) * (x2 - one) + c(19.8) * (x4 - one),
            c(2.0) * (x3 - one) + c(360.0) * x3 * lower,
            c(-180.0) * lower + c(20.2) * (x4 - one) + c(19.8) * (x2 - one),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colville_known_properties() {
        let x = Array1::<f64>::from_vec(vec![1.0; 4]);
        assert_eq!(Colville::evaluate(&x), Ok(0.0));
        assert_eq!(Colville::gradient(&x).unwrap().to_vec(), vec![0.0; 4]);

        // f(0) = 1 + 1 + 10.1 * 2 + 19.8
        let x = Array1::<f64>::from_vec(vec![0.0; 4]);
        assert!((Colville::evaluate(&x).unwrap() - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_colville_rejects_other_dimensions() {
        let x = Array1::<f64>::from_vec(vec![1.0; 3]);
        assert!(Colville::evaluate(&x).unwrap_err().is_dimension_error());
    }
}

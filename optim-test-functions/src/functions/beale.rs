//! Beale test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Beale function - 2D, sharp peaks at the corners of the domain
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
pub struct Beale;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "beale",
    description: "Three squared polynomial residuals with a flat valley toward (3, 0.5)",
    math: r"f(\mathbf{x}) = (1.5 - x_1 + x_1 x_2)^2 + (2.25 - x_1 + x_1 x_2^2)^2 + (2.625 - x_1 + x_1 x_2^3)^2",
    source: "Beale (1958), On an Iterative Method for Finding a Local Minimum of a Function of More than One Variable",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-4.5),
    upper_bound: Point::Fill(4.5),
    start: Point::Fixed(&[1.0, 1.0]),
    min_position: Point::Fixed(&[3.0, 0.5]),
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

const TARGETS: [f64; 3] = [1.5, 2.25, 2.625];

impl Benchmark for Beale {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        TARGETS.iter().enumerate().fold(T::zero(), |acc, (k, &c)| {
            acc + (T::lit(c) - x1 + x1 * x2.powi(k as i32 + 1)).powi(2)
        })
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let two = T::lit(2.0);
        let mut grad = Array1::zeros(2);
        for (k, &c) in TARGETS.iter().enumerate() {
            let p = k as i32 + 1;
            let residual = T::lit(c) - x1 + x1 * x2.powi(p);
            grad[0] = grad[0] + two * residual * (x2.powi(p) - T::one());
            grad[1] = grad[1] + two * residual * x1 * T::lit(p as f64) * x2.powi(p - 1);
        }
        grad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beale_known_properties() {
        let x = Array1::<f64>::from_vec(vec![3.0, 0.5]);
        assert_eq!(Beale::evaluate(&x), Ok(0.0));
        assert_eq!(Beale::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);

        // f(0, 0) = 1.5^2 + 2.25^2 + 2.625^2
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert!((Beale::evaluate(&x).unwrap() - 14.203125).abs() < 1e-12);
    }
}

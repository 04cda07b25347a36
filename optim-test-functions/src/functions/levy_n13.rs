//! Levy N.13 test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Levy N.13 function - 2D, many local minima
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-10, 10]
pub struct LevyN13;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "levy_n13",
    description: "Squared sines on top of a quadratic bowl centred at (1, 1)",
    math: r"f(\mathbf{x}) = \sin^2(3\pi x_1) + (x_1 - 1)^2\left[1 + \sin^2(3\pi x_2)\right] + (x_2 - 1)^2\left[1 + \sin^2(2\pi x_2)\right]",
    source: "Surjanovic & Bingham (2013), Virtual Library of Simulation Experiments: Test Functions and Datasets",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[-2.0, 3.0]),
    min_position: Point::Fixed(&[1.0, 1.0]),
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

impl Benchmark for LevyN13 {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        let three_pi = T::lit(3.0) * T::PI();
        (three_pi * x1).sin().powi(2)
            + (x1 - T::one()).powi(2) * (T::one() + (three_pi * x2).sin().powi(2))
            + (x2 - T::one()).powi(2) * (T::one() + (T::TAU() * x2).sin().powi(2))
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let three_pi = T::lit(3.0) * T::PI();
        let two = T::lit(2.0);
        let (s1, c1) = (three_pi * x1).sin_cos();
        let (s2, c2) = (three_pi * x2).sin_cos();
        let (s3, c3) = (T::TAU() * x2).sin_cos();
        Array1::from_vec(vec![
            two * three_pi * s1 * c1 + two * (x1 - T::one()) * (T::one() + s2 * s2),
            (x1 - T::one()).powi(2) * two * three_pi * s2 * c2
                + two * (x2 - T::one()) * (T::one() + s3 * s3)
                + (x2 - T::one()).powi(2) * two * T::TAU() * s3 * c3,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levy_n13_known_properties() {
        let x = Array1::<f64>::from_vec(vec![1.0, 1.0]);
        assert!(LevyN13::evaluate(&x).unwrap() < 1e-28);
        assert!(LevyN13::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-12));
    }
}

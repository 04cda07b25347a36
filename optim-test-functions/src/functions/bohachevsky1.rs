//! Bohachevsky 1 test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Bohachevsky 1 function - 2D, bowl with cosine ripples
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub struct Bohachevsky1;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "bohachevsky1",
    description: "Separable quadratic bowl with cosine perturbations",
    math: r"f(\mathbf{x}) = x_1^2 + 2x_2^2 - 0.3\cos(3\pi x_1) - 0.4\cos(4\pi x_2) + 0.7",
    source: "Bohachevsky, Johnson & Stein (1986), Generalized Simulated Annealing for Function Optimization",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-100.0),
    upper_bound: Point::Fill(100.0),
    start: Point::Fixed(&[10.0, 10.0]),
    min_position: Point::Fixed(&[0.0, 0.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonConvex,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Bohachevsky1 {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        let pi = T::PI();
        x1 * x1 + T::lit(2.0) * x2 * x2 - T::lit(0.3) * (T::lit(3.0) * pi * x1).cos()
            - T::lit(0.4) * (T::lit(4.0) * pi * x2).cos()
            + T::lit(0.7)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let pi = T::PI();
        Array1::from_vec(vec![
            T::lit(2.0) * x1 + T::lit(0.9) * pi * (T::lit(3.0) * pi * x1).sin(),
            T::lit(4.0) * x2 + T::lit(1.6) * pi * (T::lit(4.0) * pi * x2).sin(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bohachevsky1_known_properties() {
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert!(Bohachevsky1::evaluate(&x).unwrap().abs() < 1e-15);
        assert_eq!(Bohachevsky1::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);
    }
}

//! Branin test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Branin (RCOS) function - 2D, three global minima
/// Global minimum: f(x) = 0.39788735772973834 at x = (-π, 12.275), (π, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub struct Branin;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "branin",
    description: "Quadratic channel in x2 modulated by a cosine in x1",
    math: r"f(\mathbf{x}) = \left(x_2 - \frac{5.1}{4\pi^2}x_1^2 + \frac{5}{\pi}x_1 - 6\right)^2 + 10\left(1 - \frac{1}{8\pi}\right)\cos x_1 + 10",
    source: "Dixon & Szego (1978), The Global Optimization Problem: An Introduction",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fixed(&[-5.0, 0.0]),
    upper_bound: Point::Fixed(&[10.0, 15.0]),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[std::f64::consts::PI, 2.275]),
    min_value: MinValue::Constant(0.39788735772973834),
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

/// Returns `(channel, d channel / d x1)`, the channel being the squared term's base.
pub(crate) fn channel<T: Scalar>(x1: T, x2: T) -> (T, T) {
    let b = T::lit(5.1) / (T::lit(4.0) * T::PI() * T::PI());
    let c = T::lit(5.0) / T::PI();
    (
        x2 - b * x1 * x1 + c * x1 - T::lit(6.0),
        -T::lit(2.0) * b * x1 + c,
    )
}

/// `10 (1 - 1 / (8 pi))`
pub(crate) fn cosine_weight<T: Scalar>() -> T {
    T::lit(10.0) * (T::one() - T::one() / (T::lit(8.0) * T::PI()))
}

impl Benchmark for Branin {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (u, _) = channel(x[0], x[1]);
        u * u + cosine_weight::<T>() * x[0].cos() + T::lit(10.0)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (u, du) = channel(x[0], x[1]);
        let two = T::lit(2.0);
        Array1::from_vec(vec![
            two * u * du - cosine_weight::<T>() * x[0].sin(),
            two * u,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_branin_three_minima() {
        for p in [[-PI, 12.275], [PI, 2.275], [3.0 * PI, 2.475]] {
            let x = Array1::<f64>::from_vec(p.to_vec());
            let value = Branin::evaluate(&x).unwrap();
            assert!((value - 0.39788735772973834).abs() < 1e-12);
        }
    }
}

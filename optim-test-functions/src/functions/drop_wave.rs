//! Drop-Wave test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::norm;
use crate::{Benchmark, Scalar};

/// Drop-Wave function - 2D, concentric ripples
/// Global minimum: f(x) = -1 at x = (0, 0)
/// Bounds: x_i in [-5.12, 5.12]
pub struct DropWave;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "drop_wave",
    description: "Radial cosine ripples damped by a quadratic denominator",
    math: r"f(\mathbf{x}) = -\frac{1 + \cos\left(12\sqrt{x_1^2 + x_2^2}\right)}{0.5(x_1^2 + x_2^2) + 2}",
    source: "Surjanovic & Bingham (2013), Virtual Library of Simulation Experiments: Test Functions and Datasets",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-5.12),
    upper_bound: Point::Fill(5.12),
    start: Point::Fixed(&[1.0, 1.0]),
    min_position: Point::Fixed(&[0.0, 0.0]),
    min_value: MinValue::Constant(-1.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::FiniteAtInf,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::Limit(0.0),
    literature: None,
};

impl Benchmark for DropWave {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let r = norm(x);
        -(T::one() + (T::lit(12.0) * r).cos()) / (T::lit(0.5) * r * r + T::lit(2.0))
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let r = norm(x);
        if r == T::zero() {
            return Array1::zeros(2);
        }
        let numerator = T::one() + (T::lit(12.0) * r).cos();
        let denominator = T::lit(0.5) * r * r + T::lit(2.0);
        let df_dr = (T::lit(12.0) * (T::lit(12.0) * r).sin() * denominator + numerator * r)
            / (denominator * denominator);
        x.mapv(|xi| df_dr * xi / r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_wave_known_properties() {
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert_eq!(DropWave::evaluate(&x), Ok(-1.0));
        assert_eq!(DropWave::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);

        let x = Array1::<f64>::from_vec(vec![f64::INFINITY, 0.0]);
        assert_eq!(DropWave::evaluate(&x), Ok(0.0));
    }
}

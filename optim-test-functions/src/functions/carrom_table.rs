//! Carrom Table test function

use ndarray::Array1;

use crate::metadata::{
    Arity, AtInfinity, FunctionMetadata, LiteratureNote, MinValue, Point, Property,
};
use crate::scalar::{norm, sign};
use crate::{Benchmark, Scalar};

/// Carrom Table function - 2D, four global minima near the corners
/// Global minimum: f(x) = -24.15681554739122 at x = (±9.6461676704103655, ±9.6461676704103655)
/// Bounds: x_i in [-10, 10]
pub struct CarromTable;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "carrom_table",
    description: "Squared cosine product amplified by a radial exponential",
    math: r"f(\mathbf{x}) = -\frac{1}{30}\left[\cos x_1 \cos x_2 \exp\left(\left|1 - \frac{\sqrt{x_1^2 + x_2^2}}{\pi}\right|\right)\right]^2",
    source: "Mishra (2006), Some New Test Functions for Global Optimization and Performance of Repulsive Particle Swarm Method",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[1.0, 1.0]),
    min_position: Point::Fixed(&[9.6461676704103655, 9.6461676704103655]),
    min_value: MinValue::Constant(-24.15681554739122),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Controversial,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
    ],
    at_infinity: AtInfinity::NegativeInfinity,
    literature: Some(LiteratureNote {
        reported_value: -24.1568155,
        reported_position: &[9.646157266348881, 9.646157266348881],
        remark: "the reported position is off in the fifth decimal; refinement moves \
                 it to 9.6461676704103655 with value -24.15681554739122",
    }),
};

impl Benchmark for CarromTable {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let r = norm(x);
        let g = x[0].cos() * x[1].cos();
        -(g * (T::one() - r / T::PI()).abs().exp()).powi(2) / T::lit(30.0)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let r = norm(x);
        let (s1, c1) = x1.sin_cos();
        let (s2, c2) = x2.sin_cos();
        let g = c1 * c2;
        let h2 = (T::lit(2.0) * (T::one() - r / T::PI()).abs()).exp();
        // d ln(h^2) / dr, divided by r; zero at the origin where cos x1 cos x2 is flat
        let radial = if r > T::zero() {
            -T::lit(2.0) * sign(T::one() - r / T::PI()) / (T::PI() * r)
        } else {
            T::zero()
        };
        let scale = -T::one() / T::lit(30.0);
        Array1::from_vec(vec![
            scale * (T::lit(-2.0) * g * s1 * c2 * h2 + g * g * h2 * radial * x1),
            scale * (T::lit(-2.0) * g * c1 * s2 * h2 + g * g * h2 * radial * x2),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrom_table_four_minima() {
        let m = 9.6461676704103655;
        for (a, b) in [(m, m), (-m, m), (m, -m), (-m, -m)] {
            let x = Array1::<f64>::from_vec(vec![a, b]);
            let value = CarromTable::evaluate(&x).unwrap();
            assert!((value + 24.15681554739122).abs() < 1e-10);
        }
    }

    #[test]
    fn test_carrom_table_reported_point_is_worse() {
        let reported = Array1::<f64>::from_vec(vec![9.646157266348881, 9.646157266348881]);
        let verified = Array1::<f64>::from_vec(vec![9.6461676704103655, 9.6461676704103655]);
        assert!(CarromTable::evaluate(&verified).unwrap() < CarromTable::evaluate(&reported).unwrap());
    }

    #[test]
    fn test_carrom_table_origin_gradient() {
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert_eq!(CarromTable::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);
    }
}

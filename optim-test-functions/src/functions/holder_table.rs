//! Holder Table test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::{norm, sign};
use crate::{Benchmark, Scalar};

/// Holder Table function - 2D, four global minima at the table legs
/// Global minimum: f(x) = -19.208502567886732 at x = (±8.0550234757365634, ±9.6645900192412729)
/// Bounds: x_i in [-10, 10]
pub struct HolderTable;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "holder_table",
    description: "Absolute sine-cosine product with a radial exponential envelope",
    math: r"f(\mathbf{x}) = -\left|\sin x_1 \cos x_2 \exp\left(\left|1 - \frac{\sqrt{x_1^2 + x_2^2}}{\pi}\right|\right)\right|",
    source: "Mishra (2006), Some New Test Functions for Global Optimization and Performance of Repulsive Particle Swarm Method",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[1.0, 1.0]),
    min_position: Point::Fixed(&[8.0550234757365634, 9.6645900192412729]),
    min_value: MinValue::Constant(-19.208502567886732),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
    ],
    at_infinity: AtInfinity::NegativeInfinity,
    literature: None,
};

impl Benchmark for HolderTable {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let r = norm(x);
        let e = (T::one() - r / T::PI()).abs().exp();
        -(x[0].sin() * x[1].cos() * e).abs()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let r = norm(x);
        let (s1, c1) = x1.sin_cos();
        let (s2, c2) = x2.sin_cos();
        let e = (T::one() - r / T::PI()).abs().exp();
        let inner = s1 * c2 * e;
        let radial = if r > T::zero() {
            -sign(T::one() - r / T::PI()) / (T::PI() * r)
        } else {
            T::zero()
        };
        let outer = -sign(inner);
        Array1::from_vec(vec![
            outer * (c1 * c2 * e + inner * radial * x1),
            outer * (-s1 * s2 * e + inner * radial * x2),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_table_four_minima() {
        let (a, b) = (8.0550234757365634, 9.6645900192412729);
        for (s1, s2) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
            let x = Array1::<f64>::from_vec(vec![s1 * a, s2 * b]);
            let value = HolderTable::evaluate(&x).unwrap();
            assert!((value + 19.208502567886732).abs() < 1e-10);
        }
        let x = Array1::<f64>::from_vec(vec![a, b]);
        assert!(HolderTable::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-9));
    }
}

//! Salomon test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::norm;
use crate::{Benchmark, Scalar};

/// Salomon function - N-dimensional, radially symmetric multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
///
/// The radial term has a cone point at the origin; the gradient there is
/// the zero subgradient.
pub struct Salomon;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "salomon",
    description: "Concentric ripples around the origin on a linear radial slope",
    math: r"f(\mathbf{x}) = 1 - \cos\left(2\pi \|\mathbf{x}\|\right) + 0.1 \|\mathbf{x}\|",
    source: "Salomon (1996), Re-evaluating Genetic Algorithm Performance under Coordinate Rotation of Benchmark Functions",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-100.0),
    upper_bound: Point::Fill(100.0),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Multimodal,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
        Property::Scalable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Salomon {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let r = norm(x);
        T::one() - (T::TAU() * r).cos() + T::lit(0.1) * r
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let r = norm(x);
        if r == T::zero() {
            return Array1::zeros(x.len());
        }
        let radial = T::TAU() * (T::TAU() * r).sin() + T::lit(0.1);
        x.mapv(|xi| radial * xi / r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salomon_values() {
        let origin = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert_eq!(Salomon::evaluate(&origin), Ok(0.0));
        assert_eq!(Salomon::gradient(&origin).unwrap().to_vec(), vec![0.0, 0.0]);

        // on the unit sphere cos(2 pi) = 1, only the slope remains
        let x = Array1::<f64>::from_vec(vec![0.6, 0.8]);
        assert!((Salomon::evaluate(&x).unwrap() - 0.1).abs() < 1e-12);
    }
}

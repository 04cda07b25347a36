//! Rastrigin test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Rastrigin function - N-dimensional, highly multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub struct Rastrigin;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "rastrigin",
    description: "Sphere modulated by cosines: a regular lattice of local minima",
    math: r"f(\mathbf{x}) = 10n + \sum_{i=1}^{n} \left[x_i^2 - 10 \cos(2\pi x_i)\right]",
    source: "Rastrigin (1974), Systems of Extremal Control",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-5.12),
    upper_bound: Point::Fill(5.12),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::HighlyMultimodal,
        Property::Multimodal,
        Property::Scalable,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Rastrigin {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let ten = T::lit(10.0);
        x.iter().fold(ten * T::idx(x.len()), |acc, &xi| {
            acc + xi * xi - ten * (T::TAU() * xi).cos()
        })
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        x.mapv(|xi| T::lit(2.0) * xi + T::lit(10.0) * T::TAU() * (T::TAU() * xi).sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rastrigin_lattice_points() {
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0, 0.0]);
        assert_eq!(Rastrigin::evaluate(&x), Ok(0.0));

        // integer points are local minima with value sum x_i^2
        let x = Array1::<f64>::from_vec(vec![1.0, -2.0]);
        assert!((Rastrigin::evaluate(&x).unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_rastrigin_gradient() {
        let x = Array1::<f64>::from_vec(vec![0.25]);
        let grad = Rastrigin::gradient(&x).unwrap();
        let expected = 0.5 + 20.0 * std::f64::consts::PI;
        assert!((grad[0] - expected).abs() < 1e-10);
    }
}

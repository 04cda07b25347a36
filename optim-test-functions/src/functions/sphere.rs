//! Sphere test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Sphere function - N-dimensional, unimodal, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub struct Sphere;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "sphere",
    description: "Convex quadratic bowl, the simplest scalable benchmark",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} x_i^2",
    source: "De Jong (1975), An Analysis of the Behavior of a Class of Genetic Adaptive Systems",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-5.12),
    upper_bound: Point::Fill(5.12),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::Differentiable,
        Property::Scalable,
        Property::Separable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Sphere {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        x.mapv(|xi| T::lit(2.0) * xi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_known_values() {
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert_eq!(Sphere::evaluate(&x), Ok(0.0));

        let x = Array1::<f64>::from_vec(vec![3.0, 4.0]);
        assert_eq!(Sphere::evaluate(&x), Ok(25.0));
        assert_eq!(Sphere::gradient(&x).unwrap().to_vec(), vec![6.0, 8.0]);
    }

    #[test]
    fn test_sphere_special_values() {
        let x = Array1::<f64>::from_vec(vec![f64::NAN, 1.0]);
        assert!(Sphere::evaluate(&x).unwrap().is_nan());

        let x = Array1::<f64>::from_vec(vec![1.0, f64::NEG_INFINITY, 2.0]);
        assert_eq!(Sphere::evaluate(&x), Ok(f64::INFINITY));
        let grad = Sphere::gradient(&x).unwrap();
        assert_eq!(grad.len(), 3);
        assert!(grad.iter().all(|&g| g == f64::INFINITY));
    }

    #[test]
    fn test_sphere_rejects_empty_input() {
        let x = Array1::<f64>::from_vec(vec![]);
        assert!(Sphere::evaluate(&x).unwrap_err().is_invalid_input());
    }
}

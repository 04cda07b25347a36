//! Rosenbrock test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Rosenbrock function - N-dimensional, curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 10]
pub struct Rosenbrock;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "rosenbrock",
    description: "Banana-shaped valley; the minimum is easy to reach, hard to converge to",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n-1} \left[100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2\right]",
    source: "Rosenbrock (1960), An Automatic Method for Finding the Greatest or Least Value of a Function",
    arity: Arity::Scalable { min: 2, default: 2 },
    lower_bound: Point::Fill(-5.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Generated(classic_start),
    min_position: Point::Fill(1.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::NonConvex,
        Property::NonSeparable,
        Property::Scalable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

/// (-1.2, 1, -1.2, 1, ...)
fn classic_start(n: usize) -> Vec<f64> {
    (0..n).map(|i| if i % 2 == 0 { -1.2 } else { 1.0 }).collect()
}

impl Benchmark for Rosenbrock {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let mut sum = T::zero();
        for i in 0..x.len() - 1 {
            let xi = x[i];
            let xi_plus_1 = x[i + 1];
            sum = sum + T::lit(100.0) * (xi_plus_1 - xi * xi).powi(2) + (T::one() - xi).powi(2);
        }
        sum
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let n = x.len();
        let mut grad = Array1::zeros(n);
        for i in 0..n - 1 {
            let residual = x[i + 1] - x[i] * x[i];
            grad[i] = grad[i] - T::lit(400.0) * x[i] * residual - T::lit(2.0) * (T::one() - x[i]);
            grad[i + 1] = grad[i + 1] + T::lit(200.0) * residual;
        }
        grad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rosenbrock_known_values() {
        let x = Array1::<f64>::from_vec(vec![1.0, 1.0]);
        assert_eq!(Rosenbrock::evaluate(&x), Ok(0.0));
        assert_eq!(Rosenbrock::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);

        // f(-1.2, 1) = 24.2
        let x = Array1::<f64>::from_vec(vec![-1.2, 1.0]);
        assert!((Rosenbrock::evaluate(&x).unwrap() - 24.2).abs() < 1e-12);
    }

    #[test]
    fn test_rosenbrock_gradient_interior_coordinate() {
        // middle coordinate collects terms from both neighbours
        let x = Array1::<f64>::from_vec(vec![0.5, -0.5, 2.0]);
        let grad = Rosenbrock::gradient(&x).unwrap();
        let expected = 200.0 * (-0.5 - 0.25) - 400.0 * -0.5 * (2.0 - 0.25) - 2.0 * (1.0 + 0.5);
        assert!((grad[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rosenbrock_requires_two_dimensions() {
        let x = Array1::<f64>::from_vec(vec![1.0]);
        let err = Rosenbrock::evaluate(&x).unwrap_err();
        assert!(err.is_dimension_error());
    }
}

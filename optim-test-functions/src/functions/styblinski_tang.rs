//! Styblinski-Tang test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Styblinski-Tang function - N-dimensional multimodal
/// Global minimum: f(x) = -39.16616570377142 n at x = (-2.903534, ..., -2.903534)
/// Bounds: x_i in [-5, 5]
pub struct StyblinskiTang;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "styblinski_tang",
    description: "Separable quartic with 2^n local minima, one per orthant",
    math: r"f(\mathbf{x}) = \frac{1}{2}\sum_{i=1}^{n} \left(x_i^4 - 16x_i^2 + 5x_i\right)",
    source: "Styblinski & Tang (1990), Experiments in Nonconvex Optimization",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-5.0),
    upper_bound: Point::Fill(5.0),
    start: Point::Fill(0.0),
    min_position: Point::Fill(-2.903534027771177),
    min_value: MinValue::PerDimension(-39.16616570377142),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonConvex,
        Property::Scalable,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for StyblinskiTang {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let sum = x.iter().fold(T::zero(), |acc, &xi| {
            acc + xi.powi(4) - T::lit(16.0) * xi * xi + T::lit(5.0) * xi
        });
        T::lit(0.5) * sum
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        x.mapv(|xi| T::lit(2.0) * xi.powi(3) - T::lit(16.0) * xi + T::lit(2.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styblinski_tang_minimum_scales_with_dimension() {
        for n in 1..=5 {
            let x = Array1::<f64>::from_elem(n, -2.903534027771177);
            let value = StyblinskiTang::evaluate(&x).unwrap();
            assert!((value - (-39.16616570377142 * n as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_styblinski_tang_local_minimum_is_worse() {
        let global = StyblinskiTang::evaluate(&Array1::<f64>::from_vec(vec![-2.903534])).unwrap();
        let local = StyblinskiTang::evaluate(&Array1::<f64>::from_vec(vec![2.746803])).unwrap();
        assert!(local > global);
    }
}

//! Trid test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Trid function - N-dimensional, convex bowl with dimension-dependent optimum
/// Global minimum: f(x) = -n(n+4)(n-1)/6 at x_i = i(n + 1 - i)
/// Bounds: x_i in [-n^2, n^2]
pub struct Trid;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "trid",
    description: "Convex quadratic with tridiagonal Hessian; bounds and optimum grow with n",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} (x_i - 1)^2 - \sum_{i=2}^{n} x_i x_{i-1}",
    source: "Adorio & Diliman (2005), MVF - Multivariate Test Functions Library in C",
    arity: Arity::Scalable { min: 2, default: 6 },
    lower_bound: Point::Generated(lower),
    upper_bound: Point::Generated(upper),
    start: Point::Fill(0.0),
    min_position: Point::Generated(minimizer),
    min_value: MinValue::Generated(minimum),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::Differentiable,
        Property::NonSeparable,
        Property::Scalable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

fn lower(n: usize) -> Vec<f64> {
    vec![-((n * n) as f64); n]
}

fn upper(n: usize) -> Vec<f64> {
    vec![(n * n) as f64; n]
}

fn minimizer(n: usize) -> Vec<f64> {
    (1..=n).map(|i| (i * (n + 1 - i)) as f64).collect()
}

fn minimum(n: usize) -> f64 {
    let n = n as f64;
    -n * (n + 4.0) * (n - 1.0) / 6.0
}

impl Benchmark for Trid {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let squares = x
            .iter()
            .fold(T::zero(), |acc, &xi| acc + (xi - T::one()).powi(2));
        let coupling = (1..x.len()).fold(T::zero(), |acc, i| acc + x[i] * x[i - 1]);
        squares - coupling
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let n = x.len();
        Array1::from_shape_fn(n, |i| {
            let mut g = T::lit(2.0) * (x[i] - T::one());
            if i > 0 {
                g = g - x[i - 1];
            }
            if i + 1 < n {
                g = g - x[i + 1];
            }
            g
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trid_known_minima() {
        // n = 6: f* = -50 at (6, 10, 12, 12, 10, 6)
        let x = Array1::<f64>::from_vec(minimizer(6));
        assert_eq!(x.to_vec(), vec![6.0, 10.0, 12.0, 12.0, 10.0, 6.0]);
        assert_eq!(Trid::evaluate(&x), Ok(-50.0));
        assert_eq!(minimum(6), -50.0);

        // n = 10: f* = -210
        let x = Array1::<f64>::from_vec(minimizer(10));
        assert_eq!(Trid::evaluate(&x), Ok(-210.0));
        assert!(Trid::gradient(&x).unwrap().iter().all(|&g| g == 0.0));
    }

    #[test]
    fn test_trid_bounds_follow_dimension() {
        assert_eq!(lower(3), vec![-9.0; 3]);
        assert_eq!(upper(4), vec![16.0; 4]);
    }
}

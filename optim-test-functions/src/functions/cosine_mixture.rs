//! Cosine Mixture test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Cosine Mixture function (minimization form) - N-dimensional multimodal
/// Global minimum: f(x) = -0.1 n at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
pub struct CosineMixture;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "cosine_mixture",
    description: "Sphere with a shallow cosine ripple; minimum value depends on n",
    math: r"f(\mathbf{x}) = -0.1 \sum_{i=1}^{n} \cos(5\pi x_i) + \sum_{i=1}^{n} x_i^2",
    source: "Breiman & Cutler (1993), A Deterministic Algorithm for Global Optimization",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-1.0),
    upper_bound: Point::Fill(1.0),
    start: Point::Fill(0.5),
    min_position: Point::Fill(0.0),
    min_value: MinValue::PerDimension(-0.1),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::Scalable,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for CosineMixture {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let five_pi = T::lit(5.0) * T::PI();
        x.iter().fold(T::zero(), |acc, &xi| {
            acc - T::lit(0.1) * (five_pi * xi).cos() + xi * xi
        })
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let five_pi = T::lit(5.0) * T::PI();
        x.mapv(|xi| T::lit(0.5) * T::PI() * (five_pi * xi).sin() + T::lit(2.0) * xi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_mixture_minimum_depends_on_dimension() {
        for n in 1..=4 {
            let x = Array1::<f64>::from_elem(n, 0.0);
            let value = CosineMixture::evaluate(&x).unwrap();
            assert!((value + 0.1 * n as f64).abs() < 1e-15);
        }
    }
}

//! Alpine N.1 test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::sign;
use crate::{Benchmark, Scalar};

/// Alpine N.1 function - N-dimensional, non-smooth multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
///
/// Where a term x_i sin(x_i) + 0.1 x_i vanishes the gradient component is
/// the zero subgradient.
pub struct AlpineN1;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "alpine_n1",
    description: "Sum of absolute values of x sin x + 0.1x, with kinks at every root",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} \left|x_i \sin(x_i) + 0.1 x_i\right|",
    source: "Rahnamayan, Tizhoosh & Salama (2007), A Novel Population Initialization Method for Accelerating Evolutionary Algorithms",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Multimodal,
        Property::NonConvex,
        Property::PartiallyDifferentiable,
        Property::Scalable,
        Property::Separable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

fn term<T: Scalar>(xi: T) -> T {
    xi * xi.sin() + T::lit(0.1) * xi
}

impl Benchmark for AlpineN1 {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter().fold(T::zero(), |acc, &xi| acc + term(xi).abs())
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        x.mapv(|xi| sign(term(xi)) * (xi.sin() + xi * xi.cos() + T::lit(0.1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpine_n1_values() {
        assert_eq!(AlpineN1::evaluate(&Array1::<f64>::from_vec(vec![0.0, 0.0])), Ok(0.0));
        assert_eq!(AlpineN1::gradient(&Array1::<f64>::from_vec(vec![0.0])).unwrap()[0], 0.0);

        let x = Array1::<f64>::from_vec(vec![-2.0]);
        let expected = (-2.0 * (-2.0_f64).sin() - 0.2).abs();
        assert!((AlpineN1::evaluate(&x).unwrap() - expected).abs() < 1e-15);
    }
}

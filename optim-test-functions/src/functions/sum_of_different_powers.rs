//! Sum of Different Powers test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::sign;
use crate::{Benchmark, Scalar};

/// Sum of Different Powers function - N-dimensional, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
pub struct SumOfDifferentPowers;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "sum_of_different_powers",
    description: "Each coordinate raised to a different power, increasing sensitivity differences",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} |x_i|^{i+1}",
    source: "Surjanovic & Bingham (2013), Virtual Library of Simulation Experiments: Test Functions and Datasets",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-1.0),
    upper_bound: Point::Fill(1.0),
    start: Point::Fill(0.5),
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

impl Benchmark for SumOfDifferentPowers {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, &xi)| acc + xi.abs().powi(i as i32 + 2))
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        Array1::from_shape_fn(x.len(), |i| {
            let p = i as i32 + 2;
            T::lit(p as f64) * x[i].abs().powi(p - 1) * sign(x[i])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_different_powers_values() {
        let x = Array1::<f64>::from_vec(vec![-0.5, 0.5]);
        assert_eq!(SumOfDifferentPowers::evaluate(&x), Ok(0.375));
        assert_eq!(
            SumOfDifferentPowers::gradient(&x).unwrap().to_vec(),
            vec![-1.0, 0.75]
        );
    }
}

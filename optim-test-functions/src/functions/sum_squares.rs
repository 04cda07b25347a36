//! Sum Squares test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Sum Squares (axis-parallel hyper-ellipsoid) - N-dimensional, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub struct SumSquares;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "sum_squares",
    description: "Axis-parallel hyper-ellipsoid with weights 1..n",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} i x_i^2",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
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

impl Benchmark for SumSquares {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, &xi)| acc + T::idx(i + 1) * xi * xi)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        Array1::from_shape_fn(x.len(), |i| T::lit(2.0) * T::idx(i + 1) * x[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_squares_weights() {
        let x = Array1::<f64>::from_vec(vec![1.0, 1.0, 1.0]);
        assert_eq!(SumSquares::evaluate(&x), Ok(6.0));
        assert_eq!(SumSquares::gradient(&x).unwrap().to_vec(), vec![2.0, 4.0, 6.0]);
    }
}

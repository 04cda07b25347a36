//! Rotated Hyper-Ellipsoid test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Rotated Hyper-Ellipsoid function - N-dimensional, convex
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-65.536, 65.536]
pub struct RotatedHyperEllipsoid;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "rotated_hyper_ellipsoid",
    description: "Sum of squared prefix sums of squares; equivalent to weights n, n-1, ..., 1",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} \sum_{j=1}^{i} x_j^2",
    source: "Molga & Smutnicki (2005), Test Functions for Optimization Needs",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-65.536),
    upper_bound: Point::Fill(65.536),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::Differentiable,
        Property::Scalable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for RotatedHyperEllipsoid {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let mut prefix = T::zero();
        let mut total = T::zero();
        for &xi in x.iter() {
            prefix = prefix + xi * xi;
            total = total + prefix;
        }
        total
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        // x_j appears in the prefix sums j..n
        let n = x.len();
        Array1::from_shape_fn(n, |j| T::lit(2.0) * T::idx(n - j) * x[j])
    }
}

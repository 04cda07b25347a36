//! Booth test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Booth function - 2D, convex quadratic
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub struct Booth;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "booth",
    description: "Sum of two squared linear residuals",
    math: r"f(\mathbf{x}) = (x_1 + 2x_2 - 7)^2 + (2x_1 + x_2 - 5)^2",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[1.0, 3.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Convex,
        Property::Differentiable,
        Property::NonSeparable,
        Property::StronglyConvex,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Booth {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let a = x[0] + T::lit(2.0) * x[1] - T::lit(7.0);
        let b = T::lit(2.0) * x[0] + x[1] - T::lit(5.0);
        a * a + b * b
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let a = x[0] + T::lit(2.0) * x[1] - T::lit(7.0);
        let b = T::lit(2.0) * x[0] + x[1] - T::lit(5.0);
        Array1::from_vec(vec![
            T::lit(2.0) * a + T::lit(4.0) * b,
            T::lit(4.0) * a + T::lit(2.0) * b,
        ])
    }
}

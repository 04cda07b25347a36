//! Himmelblau test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Himmelblau function - 2D, four identical global minima
/// Global minimum: f(x) = 0 at x = (3, 2), (-2.805118, 3.131312),
/// (-3.779310, -3.283186) and (3.584428, -1.848126)
/// Bounds: x_i in [-5, 5]
pub struct Himmelblau;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "himmelblau",
    description: "Quartic with four global minima of equal value",
    math: r"f(\mathbf{x}) = (x_1^2 + x_2 - 11)^2 + (x_1 + x_2^2 - 7)^2",
    source: "Himmelblau (1972), Applied Nonlinear Programming",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-5.0),
    upper_bound: Point::Fill(5.0),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[3.0, 2.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Himmelblau {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let a = x[0] * x[0] + x[1] - T::lit(11.0);
        let b = x[0] + x[1] * x[1] - T::lit(7.0);
        a * a + b * b
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let a = x[0] * x[0] + x[1] - T::lit(11.0);
        let b = x[0] + x[1] * x[1] - T::lit(7.0);
        let two = T::lit(2.0);
        Array1::from_vec(vec![
            two * two * x[0] * a + two * b,
            two * a + two * two * x[1] * b,
        ])
    }
}

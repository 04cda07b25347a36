//! McCormick test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// McCormick function - 2D, on an asymmetric box
/// Global minimum: f(x) = -1.9132229549810362 at x = (-0.5471975511965977, -1.5471975511965977)
/// Bounds: x1 in [-1.5, 4], x2 in [-3, 4]
pub struct McCormick;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "mccormick",
    description: "Sine of the sum plus a tilted quadratic in the difference",
    math: r"f(\mathbf{x}) = \sin(x_1 + x_2) + (x_1 - x_2)^2 - 1.5x_1 + 2.5x_2 + 1",
    source: "McCormick (1976), Computability of Global Solutions to Factorable Nonconvex Programs",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fixed(&[-1.5, -3.0]),
    upper_bound: Point::Fixed(&[4.0, 4.0]),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[-0.5471975511965977, -1.5471975511965977]),
    min_value: MinValue::Constant(-1.9132229549810362),
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

impl Benchmark for McCormick {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        (x1 + x2).sin() + (x1 - x2).powi(2) - T::lit(1.5) * x1 + T::lit(2.5) * x2 + T::one()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let c = (x1 + x2).cos();
        let d = T::lit(2.0) * (x1 - x2);
        Array1::from_vec(vec![c + d - T::lit(1.5), c - d + T::lit(2.5)])
    }
}

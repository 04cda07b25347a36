//! Three-Hump Camel test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Three-Hump Camel function - 2D, three local minima
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5, 5]
pub struct ThreeHumpCamel;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "three_hump_camel",
    description: "Sixth-degree polynomial with three humps along x1",
    math: r"f(\mathbf{x}) = 2x_1^2 - 1.05x_1^4 + \frac{x_1^6}{6} + x_1x_2 + x_2^2",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-5.0),
    upper_bound: Point::Fill(5.0),
    start: Point::Fixed(&[2.0, -1.0]),
    min_position: Point::Fixed(&[0.0, 0.0]),
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

impl Benchmark for ThreeHumpCamel {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        T::lit(2.0) * x1.powi(2) - T::lit(1.05) * x1.powi(4) + x1.powi(6) / T::lit(6.0)
            + x1 * x2
            + x2 * x2
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        Array1::from_vec(vec![
            T::lit(4.0) * x1 - T::lit(4.2) * x1.powi(3) + x1.powi(5) + x2,
            x1 + T::lit(2.0) * x2,
        ])
    }
}

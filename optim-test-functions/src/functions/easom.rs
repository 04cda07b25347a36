//! Easom test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Easom function - 2D, needle in a flat plateau
/// Global minimum: f(x) = -1 at x = (π, π)
/// Bounds: x_i in [-100, 100]
pub struct Easom;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "easom",
    description: "Flat landscape with a single narrow well around (pi, pi)",
    math: r"f(\mathbf{x}) = -\cos(x_1)\cos(x_2)\exp\left(-(x_1-\pi)^2-(x_2-\pi)^2\right)",
    source: "Easom (1990), A Survey of Global Optimization Techniques",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-100.0),
    upper_bound: Point::Fill(100.0),
    start: Point::Fixed(&[1.0, 1.0]),
    min_position: Point::Fixed(&[std::f64::consts::PI, std::f64::consts::PI]),
    min_value: MinValue::Constant(-1.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::FiniteAtInf,
        Property::Multimodal,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::Limit(0.0),
    literature: None,
};

impl Benchmark for Easom {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        let pi = T::PI();
        -x1.cos() * x2.cos() * (-(x1 - pi).powi(2) - (x2 - pi).powi(2)).exp()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let pi = T::PI();
        let two = T::lit(2.0);
        let e = (-(x1 - pi).powi(2) - (x2 - pi).powi(2)).exp();
        let (s1, c1) = x1.sin_cos();
        let (s2, c2) = x2.sin_cos();
        Array1::from_vec(vec![
            e * c2 * (s1 + two * c1 * (x1 - pi)),
            e * c1 * (s2 + two * c2 * (x2 - pi)),
        ])
    }
}

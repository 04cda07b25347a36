//! Bird test function

use std::f64::consts::TAU;

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Bird function - 2D, two global minima
/// Global minimum: f(x) = -106.7645367492647 at x = (4.701043130249553, 3.1529385037249301)
/// and x = (-1.5821421769300335, -3.1302468034546564)
/// Bounds: x_i in [-2π, 2π]
pub struct Bird;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "bird",
    description: "Sine and cosine terms amplified by nested exponentials",
    math: r"f(\mathbf{x}) = \sin x_1 \, e^{(1 - \cos x_2)^2} + \cos x_2 \, e^{(1 - \sin x_1)^2} + (x_1 - x_2)^2",
    source: "Mishra (2006), Some New Test Functions for Global Optimization and Performance of Repulsive Particle Swarm Method",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-TAU),
    upper_bound: Point::Fill(TAU),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[4.701043130249553, 3.1529385037249301]),
    min_value: MinValue::Constant(-106.7645367492647),
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

impl Benchmark for Bird {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        x1.sin() * (T::one() - x2.cos()).powi(2).exp()
            + x2.cos() * (T::one() - x1.sin()).powi(2).exp()
            + (x1 - x2).powi(2)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let two = T::lit(2.0);
        let (s1, c1) = x1.sin_cos();
        let (s2, c2) = x2.sin_cos();
        let e1 = (T::one() - c2).powi(2).exp();
        let e2 = (T::one() - s1).powi(2).exp();
        Array1::from_vec(vec![
            c1 * e1 - two * c2 * e2 * (T::one() - s1) * c1 + two * (x1 - x2),
            two * s1 * e1 * (T::one() - c2) * s2 - s2 * e2 - two * (x1 - x2),
        ])
    }
}

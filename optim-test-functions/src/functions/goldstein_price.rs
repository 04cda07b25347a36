//! Goldstein-Price test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Goldstein-Price function - 2D, product of two polynomial factors
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
pub struct GoldsteinPrice;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "goldstein_price",
    description: "Eighth-degree polynomial with several local minima and a steep range",
    math: r"f(\mathbf{x}) = \left[1 + (x_1+x_2+1)^2 (19 - 14x_1 + 3x_1^2 - 14x_2 + 6x_1x_2 + 3x_2^2)\right] \left[30 + (2x_1-3x_2)^2 (18 - 32x_1 + 12x_1^2 + 48x_2 - 36x_1x_2 + 27x_2^2)\right]",
    source: "Goldstein & Price (1971), On Descent from Local Minima",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-2.0),
    upper_bound: Point::Fill(2.0),
    start: Point::Fixed(&[1.0, 1.0]),
    min_position: Point::Fixed(&[0.0, -1.0]),
    min_value: MinValue::Constant(3.0),
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

/// The two factors and their partial derivatives.
struct Factors<T> {
    a: T,
    a_x: T,
    a_y: T,
    b: T,
    b_x: T,
    b_y: T,
}

fn factors<T: Scalar>(x: T, y: T) -> Factors<T> {
    let c = T::lit;

    let s = x + y + T::one();
    let p = c(19.0) - c(14.0) * x + c(3.0) * x * x - c(14.0) * y + c(6.0) * x * y + c(3.0) * y * y;
    // dp/dx == dp/dy
    let p_d = c(-14.0) + c(6.0) * x + c(6.0) * y;
    let a = T::one() + s * s * p;
    let a_d = c(2.0) * s * p + s * s * p_d;

    let t = c(2.0) * x - c(3.0) * y;
    let q = c(18.0) - c(32.0) * x + c(12.0) * x * x + c(48.0) * y - c(36.0) * x * y
        + c(27.0) * y * y;
    let q_x = c(-32.0) + c(24.0) * x - c(36.0) * y;
    let q_y = c(48.0) - c(36.0) * x + c(54.0) * y;
    let b = c(30.0) + t * t * q;

    Factors {
        a,
        a_x: a_d,
        a_y: a_d,
        b,
        b_x: c(4.0) * t * q + t * t * q_x,
        b_y: c(-6.0) * t * q + t * t * q_y,
    }
}

impl Benchmark for GoldsteinPrice {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let f = factors(x[0], x[1]);
        f.a * f.b
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let f = factors(x[0], x[1]);
        Array1::from_vec(vec![f.a_x * f.b + f.a * f.b_x, f.a_y * f.b + f.a * f.b_y])
    }
}

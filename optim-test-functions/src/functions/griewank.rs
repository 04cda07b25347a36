//! Griewank test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Griewank function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub struct Griewank;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "griewank",
    description: "Quadratic bowl with a product of cosines coupling the coordinates",
    math: r"f(\mathbf{x}) = 1 + \frac{1}{4000}\sum_{i=1}^{n} x_i^2 - \prod_{i=1}^{n} \cos\left(\frac{x_i}{\sqrt{i}}\right)",
    source: "Griewank (1981), Generalized Descent for Global Optimization",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-600.0),
    upper_bound: Point::Fill(600.0),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonSeparable,
        Property::Scalable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

fn scaled<T: Scalar>(xi: T, i: usize) -> T {
    xi / T::idx(i + 1).sqrt()
}

impl Benchmark for Griewank {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        let prod_cos = x
            .iter()
            .enumerate()
            .fold(T::one(), |acc, (i, &xi)| acc * scaled(xi, i).cos());
        T::one() + sum_sq / T::lit(4000.0) - prod_cos
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let n = x.len();
        Array1::from_shape_fn(n, |i| {
            // product of the other cosines, without dividing by cos(x_i)
            let others = (0..n)
                .filter(|&j| j != i)
                .fold(T::one(), |acc, j| acc * scaled(x[j], j).cos());
            let root = T::idx(i + 1).sqrt();
            x[i] / T::lit(2000.0) + scaled(x[i], i).sin() / root * others
        })
    }
}

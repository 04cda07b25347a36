//! HappyCat test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::sign;
use crate::{Benchmark, Scalar};

/// HappyCat function - N-dimensional, a ridge along the sphere ||x||^2 = n
/// Global minimum: f(x) = 0 at x = (-1, -1, ..., -1)
/// Bounds: x_i in [-2, 2]
///
/// The optimum lies on the ridge where |·|^(1/4) has an infinite slope, so
/// the gradient is NaN wherever ||x||^2 = n, including at the minimum.
pub struct HappyCat;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "happy_cat",
    description: "Cusp ridge on the sphere of radius sqrt(n) leading to the optimum",
    math: r"f(\mathbf{x}) = \left|\|\mathbf{x}\|^2 - n\right|^{1/4} + \frac{1}{n}\left(\frac{1}{2}\|\mathbf{x}\|^2 + \sum_{i=1}^{n} x_i\right) + \frac{1}{2}",
    source: "Beyer & Finck (2012), HappyCat - A Simple Function Class Where Well-Known Direct Search Algorithms Do Fail",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-2.0),
    upper_bound: Point::Fill(2.0),
    start: Point::Fill(0.0),
    min_position: Point::Fill(-1.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Multimodal,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
        Property::Scalable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for HappyCat {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let n = T::idx(x.len());
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        let sum = x.iter().fold(T::zero(), |acc, &xi| acc + xi);
        (sum_sq - n).abs().powf(T::lit(0.25)) + (T::lit(0.5) * sum_sq + sum) / n + T::lit(0.5)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let n = T::idx(x.len());
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        let d = sum_sq - n;
        if d == T::zero() {
            return Array1::from_elem(x.len(), T::nan());
        }
        let ridge = T::lit(0.5) * d.abs().powf(T::lit(-0.75)) * sign(d);
        x.mapv(|xi| ridge * xi + (xi + T::one()) / n)
    }
}

//! Quartic test function with noise

use ndarray::Array1;
use rand::Rng;

use crate::error::Result;
use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::{any_infinite, any_nan};
use crate::{Benchmark, Scalar};

/// Quartic function with noise (De Jong F4) - unimodal with added random noise
/// Global minimum: f(x) = 0 + noise at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1.28, 1.28]
///
/// Every evaluation adds a fresh uniform sample from [0, 1), so two calls
/// at the same point generally differ. `evaluate` draws from the calling
/// thread's generator; use [`Quartic::evaluate_with_rng`] for reproducible
/// runs. The gradient covers the deterministic part only.
pub struct Quartic;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "quartic",
    description: "Weighted quartic with additive uniform noise in [0, 1)",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} i x_i^4 + \mathcal{U}[0, 1)",
    source: "De Jong (1975), An Analysis of the Behavior of a Class of Genetic Adaptive Systems",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-1.28),
    upper_bound: Point::Fill(1.28),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::HasNoise,
        Property::Scalable,
        Property::Separable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

fn deterministic<T: Scalar>(x: &Array1<T>) -> T {
    x.iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, &xi)| acc + T::idx(i + 1) * xi.powi(4))
}

impl Quartic {
    /// Evaluates with noise drawn from `rng` instead of the thread-local generator.
    pub fn evaluate_with_rng<T: Scalar, R: Rng + ?Sized>(x: &Array1<T>, rng: &mut R) -> Result<T> {
        METADATA.arity.check(METADATA.name, x.len())?;
        if any_nan(x) {
            return Ok(T::nan());
        }
        if any_infinite(x) {
            return Ok(T::lit(METADATA.at_infinity.value()));
        }
        Ok(deterministic(x) + T::lit(rng.random::<f64>()))
    }
}

impl Benchmark for Quartic {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        deterministic(x) + T::lit(rand::rng().random::<f64>())
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        Array1::from_shape_fn(x.len(), |i| T::lit(4.0) * T::idx(i + 1) * x[i].powi(3))
    }
}

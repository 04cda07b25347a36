//! Numeric capability trait shared by every test function
//!
//! Test functions are written once, generically over [`Scalar`], and are
//! monomorphized per call site. Implementations are provided for:
//! - `f64` and `f32`
//! - [`Dual`](crate::dual::Dual), used to cross-check analytic gradients
//! - any other type implementing `num_traits::Float` (e.g. an arbitrary
//!   precision float wrapper)

use ndarray::Array1;
use num_traits::{Float, FloatConst, FromPrimitive};
use std::fmt::Debug;

/// Arithmetic, transcendental functions, comparison and NaN/Inf predicates.
pub trait Scalar: Float + FloatConst + FromPrimitive + Debug + Send + Sync + 'static {
    /// Converts an `f64` literal into this type.
    ///
    /// Falls back to NaN for types that cannot represent the value, so a
    /// lossy conversion surfaces as a NaN result rather than a panic.
    #[inline]
    fn lit(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Converts an index or dimension into this type.
    #[inline]
    fn idx(value: usize) -> Self {
        Self::from_usize(value).unwrap_or_else(Self::nan)
    }
}

impl<T> Scalar for T where T: Float + FloatConst + FromPrimitive + Debug + Send + Sync + 'static {}

/// Sign function returning zero at zero.
///
/// Used as the subgradient of `|x|`; `Float::signum` returns ±1 at ±0.
#[inline]
pub fn sign<T: Scalar>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

/// Returns `true` if any component is NaN.
pub fn any_nan<T: Scalar>(x: &Array1<T>) -> bool {
    x.iter().any(|v| v.is_nan())
}

/// Returns `true` if any component is +Inf or -Inf.
pub fn any_infinite<T: Scalar>(x: &Array1<T>) -> bool {
    x.iter().any(|v| v.is_infinite())
}

/// Euclidean norm `sqrt(sum x_i^2)`.
pub fn norm<T: Scalar>(x: &Array1<T>) -> T {
    x.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
}

//! Forward-mode dual numbers
//!
//! `Dual<T>` carries a value and the derivative of that value with respect
//! to one seeded input direction. Every test function is generic over
//! [`Scalar`], so evaluating it at dual inputs yields an algorithmic
//! directional derivative that the hand-written gradients are checked
//! against.
//!
//! Non-smooth primitives follow these conventions:
//! - `abs` uses slope `+1` at zero
//! - `floor`, `ceil`, `round`, `trunc`, `signum` and `%` have zero derivative
//! - `max` / `min` follow the selected operand, the second one on ties

use crate::scalar::Scalar;
use ndarray::Array1;
use num_traits::{Float, FloatConst, FromPrimitive, Num, NumCast, One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::num::FpCategory;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A value together with its derivative along one direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dual<T: Scalar> {
    /// Function value
    pub val: T,
    /// Directional derivative
    pub eps: T,
}

impl<T: Scalar> Dual<T> {
    /// Creates a dual number from a value and a derivative.
    pub fn new(val: T, eps: T) -> Self {
        Self { val, eps }
    }

    /// A constant: derivative zero.
    pub fn constant(val: T) -> Self {
        Self::new(val, T::zero())
    }

    /// An independent variable: derivative one.
    pub fn variable(val: T) -> Self {
        Self::new(val, T::one())
    }

    /// Result of an elementary function with value `val` and local slope
    /// `slope` at `self.val`.
    #[inline]
    fn chain(self, val: T, slope: T) -> Self {
        Self::new(val, self.eps * slope)
    }
}

// Ordering only looks at the value part
impl<T: Scalar> PartialOrd for Dual<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

/// Gradient of `f` at `x` via one forward pass per coordinate.
pub fn gradient_of<F>(f: F, x: &Array1<f64>) -> Array1<f64>
where
    F: Fn(&Array1<Dual<f64>>) -> Dual<f64>,
{
    let mut seeded = x.mapv(Dual::constant);
    let mut grad = Array1::zeros(x.len());
    for i in 0..x.len() {
        seeded[i].eps = 1.0;
        grad[i] = f(&seeded).eps;
        seeded[i].eps = 0.0;
    }
    grad
}

impl<T: Scalar> Add for Dual<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.eps + rhs.eps)
    }
}

impl<T: Scalar> Sub for Dual<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.eps - rhs.eps)
    }
}

impl<T: Scalar> Mul for Dual<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.val * rhs.val, self.eps * rhs.val + rhs.eps * self.val)
    }
}

impl<T: Scalar> Div for Dual<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // (u / v)' = (u' - (u / v) v') / v
        let q = self.val / rhs.val;
        Self::new(q, (self.eps - q * rhs.eps) / rhs.val)
    }
}

impl<T: Scalar> Neg for Dual<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.val, -self.eps)
    }
}

impl<T: Scalar> Rem for Dual<T> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self::constant(self.val % rhs.val)
    }
}

impl<T: Scalar> Zero for Dual<T> {
    fn zero() -> Self {
        Self::constant(T::zero())
    }
    fn is_zero(&self) -> bool {
        self.val.is_zero() && self.eps.is_zero()
    }
}

impl<T: Scalar> One for Dual<T> {
    fn one() -> Self {
        Self::constant(T::one())
    }
}

impl<T: Scalar> Num for Dual<T> {
    type FromStrRadixErr = T::FromStrRadixErr;
    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        T::from_str_radix(src, radix).map(Self::constant)
    }
}

impl<T: Scalar> ToPrimitive for Dual<T> {
    fn to_i64(&self) -> Option<i64> {
        self.val.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.val.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        self.val.to_f64()
    }
}

impl<T: Scalar> FromPrimitive for Dual<T> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self::constant)
    }
    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self::constant)
    }
    fn from_f64(n: f64) -> Option<Self> {
        T::from_f64(n).map(Self::constant)
    }
}

impl<T: Scalar> NumCast for Dual<T> {
    fn from<N: ToPrimitive>(n: N) -> Option<Self> {
        <T as NumCast>::from(n).map(Self::constant)
    }
}

/// Lifts constant-valued associated functions of `T` to constants of `Dual<T>`.
macro_rules! lift_constants {
    ($($name:ident),* $(,)?) => {
        $(
            fn $name() -> Self {
                Self::constant(T::$name())
            }
        )*
    };
}

/// Forwards value-only predicates and queries to `T`.
macro_rules! forward_to_value {
    ($($name:ident -> $ret:ty),* $(,)?) => {
        $(
            fn $name(self) -> $ret {
                self.val.$name()
            }
        )*
    };
}

/// Piecewise-constant functions: value from `T`, zero derivative.
macro_rules! step_functions {
    ($($name:ident),* $(,)?) => {
        $(
            fn $name(self) -> Self {
                Self::constant(self.val.$name())
            }
        )*
    };
}

impl<T: Scalar> FloatConst for Dual<T> {
    lift_constants!(
        E,
        FRAC_1_PI,
        FRAC_1_SQRT_2,
        FRAC_2_PI,
        FRAC_2_SQRT_PI,
        FRAC_PI_2,
        FRAC_PI_3,
        FRAC_PI_4,
        FRAC_PI_6,
        FRAC_PI_8,
        LN_10,
        LN_2,
        LOG10_E,
        LOG2_E,
        PI,
        SQRT_2,
    );
}

impl<T: Scalar> Float for Dual<T> {
    lift_constants!(
        nan,
        infinity,
        neg_infinity,
        neg_zero,
        min_value,
        max_value,
        min_positive_value,
    );

    forward_to_value!(
        is_nan -> bool,
        is_infinite -> bool,
        is_finite -> bool,
        is_normal -> bool,
        is_sign_positive -> bool,
        is_sign_negative -> bool,
        classify -> FpCategory,
        integer_decode -> (u64, i16, i8),
    );

    step_functions!(floor, ceil, round, trunc, signum);

    fn fract(self) -> Self {
        self.chain(self.val.fract(), T::one())
    }

    fn abs(self) -> Self {
        let slope = if self.val < T::zero() { -T::one() } else { T::one() };
        self.chain(self.val.abs(), slope)
    }

    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    fn recip(self) -> Self {
        let r = self.val.recip();
        self.chain(r, -r * r)
    }

    fn powi(self, n: i32) -> Self {
        match n {
            0 => Self::one(),
            _ => self.chain(self.val.powi(n), T::lit(n as f64) * self.val.powi(n - 1)),
        }
    }

    fn powf(self, n: Self) -> Self {
        if !n.eps.is_zero() {
            return (n * self.ln()).exp();
        }
        // constant exponent keeps negative and zero bases usable
        let slope = n.val * self.val.powf(n.val - T::one());
        self.chain(self.val.powf(n.val), slope)
    }

    fn sqrt(self) -> Self {
        let root = self.val.sqrt();
        self.chain(root, (root + root).recip())
    }

    fn cbrt(self) -> Self {
        let root = self.val.cbrt();
        self.chain(root, (T::lit(3.0) * root * root).recip())
    }

    fn exp(self) -> Self {
        let e = self.val.exp();
        self.chain(e, e)
    }

    fn exp2(self) -> Self {
        let e = self.val.exp2();
        self.chain(e, e * T::LN_2())
    }

    fn exp_m1(self) -> Self {
        self.chain(self.val.exp_m1(), self.val.exp())
    }

    fn ln(self) -> Self {
        self.chain(self.val.ln(), self.val.recip())
    }

    fn ln_1p(self) -> Self {
        self.chain(self.val.ln_1p(), (T::one() + self.val).recip())
    }

    fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }

    fn log2(self) -> Self {
        self.chain(self.val.log2(), (self.val * T::LN_2()).recip())
    }

    fn log10(self) -> Self {
        self.chain(self.val.log10(), (self.val * T::LN_10()).recip())
    }

    fn max(self, other: Self) -> Self {
        if self.val > other.val {
            self
        } else {
            other
        }
    }

    fn min(self, other: Self) -> Self {
        if self.val < other.val {
            self
        } else {
            other
        }
    }

    fn abs_sub(self, other: Self) -> Self {
        (self - other).max(Self::zero())
    }

    fn hypot(self, other: Self) -> Self {
        (self * self + other * other).sqrt()
    }

    fn sin(self) -> Self {
        let (s, c) = self.val.sin_cos();
        self.chain(s, c)
    }

    fn cos(self) -> Self {
        let (s, c) = self.val.sin_cos();
        self.chain(c, -s)
    }

    fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.val.sin_cos();
        (self.chain(s, c), self.chain(c, -s))
    }

    fn tan(self) -> Self {
        let t = self.val.tan();
        self.chain(t, T::one() + t * t)
    }

    fn asin(self) -> Self {
        self.chain(self.val.asin(), (T::one() - self.val * self.val).sqrt().recip())
    }

    fn acos(self) -> Self {
        self.chain(self.val.acos(), -(T::one() - self.val * self.val).sqrt().recip())
    }

    fn atan(self) -> Self {
        self.chain(self.val.atan(), (T::one() + self.val * self.val).recip())
    }

    fn atan2(self, other: Self) -> Self {
        let r2 = self.val * self.val + other.val * other.val;
        Self::new(
            self.val.atan2(other.val),
            (other.val * self.eps - self.val * other.eps) / r2,
        )
    }

    fn sinh(self) -> Self {
        self.chain(self.val.sinh(), self.val.cosh())
    }

    fn cosh(self) -> Self {
        self.chain(self.val.cosh(), self.val.sinh())
    }

    fn tanh(self) -> Self {
        let t = self.val.tanh();
        self.chain(t, T::one() - t * t)
    }

    fn asinh(self) -> Self {
        self.chain(self.val.asinh(), (self.val * self.val + T::one()).sqrt().recip())
    }

    fn acosh(self) -> Self {
        self.chain(self.val.acosh(), (self.val * self.val - T::one()).sqrt().recip())
    }

    fn atanh(self) -> Self {
        self.chain(self.val.atanh(), (T::one() - self.val * self.val).recip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dual_basic_arithmetic() {
        let x = Dual::variable(2.0_f64);
        let c = Dual::constant(3.0_f64);

        let sum = x + c;
        assert_relative_eq!(sum.val, 5.0);
        assert_relative_eq!(sum.eps, 1.0);

        let prod = x * c;
        assert_relative_eq!(prod.val, 6.0);
        assert_relative_eq!(prod.eps, 3.0);

        // d/dx x/(x+1) = 1/(x+1)^2
        let quot = x / (x + Dual::one());
        assert_relative_eq!(quot.val, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(quot.eps, 1.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dual_chain_rule() {
        // d/dx sin(x^2) = 2x cos(x^2)
        let x = Dual::variable(2.0_f64);
        let result = (x * x).sin();
        assert_relative_eq!(result.val, 4.0_f64.sin(), epsilon = 1e-12);
        assert_relative_eq!(result.eps, 4.0 * 4.0_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_dual_powers() {
        let x = Dual::variable(2.0_f64);
        let cubed = x.powi(3);
        assert_relative_eq!(cubed.val, 8.0);
        assert_relative_eq!(cubed.eps, 12.0);

        assert_eq!(x.powi(0), Dual::one());

        // d/dx x^-2 = -2 x^-3
        let inverse_square = x.powi(-2);
        assert_relative_eq!(inverse_square.val, 0.25);
        assert_relative_eq!(inverse_square.eps, -0.25);
        assert_relative_eq!(x.recip().eps, -0.25);

        // constant exponent on a negative base
        let y = Dual::variable(-2.0_f64);
        let squared = y.powf(Dual::constant(2.0_f64));
        assert_relative_eq!(squared.val, 4.0, epsilon = 1e-12);
        assert_relative_eq!(squared.eps, -4.0, epsilon = 1e-12);

        let root = Dual::variable(4.0_f64).sqrt();
        assert_relative_eq!(root.val, 2.0);
        assert_relative_eq!(root.eps, 0.25);
    }

    #[test]
    fn test_dual_non_smooth() {
        let neg = Dual::variable(-1.5_f64);
        assert_relative_eq!(neg.abs().eps, -1.0);
        assert_relative_eq!(neg.floor().val, -2.0);
        assert_relative_eq!(neg.floor().eps, 0.0);
    }

    #[test]
    fn test_dual_ordering_ignores_derivative() {
        let a = Dual::new(1.0_f64, 100.0);
        let b = Dual::new(2.0_f64, -100.0);
        assert!(a < b);
        assert_eq!(a.max(b).val, 2.0);
    }

    #[test]
    fn test_gradient_of() {
        // f(x, y) = x^2 y + exp(y)
        let f = |x: &Array1<Dual<f64>>| x[0] * x[0] * x[1] + x[1].exp();
        let grad = gradient_of(f, &Array1::from_vec(vec![3.0, 0.5]));
        assert_relative_eq!(grad[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(grad[1], 9.0 + 0.5_f64.exp(), epsilon = 1e-12);
    }
}

//! Cross-in-Tray test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::{norm, sign};
use crate::{Benchmark, Scalar};

/// Cross-in-Tray function - 2D, four global minima
/// Global minimum: f(x) = -2.062611870822738 at x = (±1.3494066171539108, ±1.3494066171539108)
/// Bounds: x_i in [-10, 10]
pub struct CrossInTray;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "cross_in_tray",
    description: "Many local minima arranged in a tray, flat along the axes",
    math: r"f(\mathbf{x}) = -0.0001\left(\left|\sin x_1 \sin x_2 \exp\left(\left|100 - \frac{\sqrt{x_1^2 + x_2^2}}{\pi}\right|\right)\right| + 1\right)^{0.1}",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[0.5, 0.5]),
    min_position: Point::Fixed(&[1.3494066171539108, 1.3494066171539108]),
    min_value: MinValue::Constant(-2.062611870822738),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
    ],
    at_infinity: AtInfinity::NegativeInfinity,
    literature: None,
};

impl Benchmark for CrossInTray {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let r = norm(x);
        let e = (T::lit(100.0) - r / T::PI()).abs().exp();
        -T::lit(1e-4) * ((x[0].sin() * x[1].sin() * e).abs() + T::one()).powf(T::lit(0.1))
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let r = norm(x);
        let (s1, c1) = x1.sin_cos();
        let (s2, c2) = x2.sin_cos();
        let e = (T::lit(100.0) - r / T::PI()).abs().exp();
        let inner = s1 * s2 * e;
        let q = inner.abs() + T::one();
        let radial = if r > T::zero() {
            -sign(T::lit(100.0) - r / T::PI()) / (T::PI() * r)
        } else {
            T::zero()
        };
        let outer = -T::lit(1e-5) * q.powf(T::lit(-0.9)) * sign(inner);
        Array1::from_vec(vec![
            outer * (c1 * s2 * e + inner * radial * x1),
            outer * (s1 * c2 * e + inner * radial * x2),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_in_tray_four_minima() {
        let m = 1.3494066171539108;
        for (a, b) in [(m, m), (-m, m), (m, -m), (-m, -m)] {
            let x = Array1::<f64>::from_vec(vec![a, b]);
            let value = CrossInTray::evaluate(&x).unwrap();
            assert!((value + 2.062611870822738).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cross_in_tray_axes_are_flat() {
        let x = Array1::<f64>::from_vec(vec![0.0, 3.0]);
        assert!((CrossInTray::evaluate(&x).unwrap() + 1e-4).abs() < 1e-15);
    }
}

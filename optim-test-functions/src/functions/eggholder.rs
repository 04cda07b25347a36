//! Eggholder test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::sign;
use crate::{Benchmark, Scalar};

/// Eggholder function - 2D, deceptive, minimum on the domain boundary
/// Global minimum: f(x) = -959.6406627208507 at x = (512, 404.2318051137578)
/// Bounds: x_i in [-512, 512]
pub struct Eggholder;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "eggholder",
    description: "Deep irregular wells; the global one sits on the boundary",
    math: r"f(\mathbf{x}) = -(x_2 + 47)\sin\sqrt{\left|x_2 + \frac{x_1}{2} + 47\right|} - x_1 \sin\sqrt{|x_1 - (x_2 + 47)|}",
    source: "Whitley, Rana, Dzubera & Mathias (1996), Evaluating Evolutionary Algorithms",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-512.0),
    upper_bound: Point::Fill(512.0),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[512.0, 404.2318051137578]),
    min_value: MinValue::Constant(-959.6406627208507),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Deceptive,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

/// d/dz sin(sqrt|z|), undefined at z = 0.
fn sin_sqrt_abs_slope<T: Scalar>(z: T) -> T {
    let root = z.abs().sqrt();
    root.cos() * sign(z) / (T::lit(2.0) * root)
}

impl Benchmark for Eggholder {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        let shift = x2 + T::lit(47.0);
        let a = shift + x1 / T::lit(2.0);
        let b = x1 - shift;
        -shift * a.abs().sqrt().sin() - x1 * b.abs().sqrt().sin()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let shift = x2 + T::lit(47.0);
        let a = shift + x1 / T::lit(2.0);
        let b = x1 - shift;
        if a == T::zero() || b == T::zero() {
            return Array1::from_elem(2, T::nan());
        }
        let da = sin_sqrt_abs_slope(a);
        let db = sin_sqrt_abs_slope(b);
        Array1::from_vec(vec![
            -shift * da / T::lit(2.0) - b.abs().sqrt().sin() - x1 * db,
            -a.abs().sqrt().sin() - shift * da + x1 * db,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eggholder_minimum_on_boundary() {
        let x = Array1::<f64>::from_vec(vec![512.0, 404.2318051137578]);
        let value = Eggholder::evaluate(&x).unwrap();
        assert!((value + 959.6406627208507).abs() < 1e-9);
        // only the x1 component is pushed against the bound
        let grad = Eggholder::gradient(&x).unwrap();
        assert!(grad[0] < 0.0);
        assert!(grad[1].abs() < 1e-8);
    }

    #[test]
    fn test_eggholder_kink_gradient_is_nan() {
        // x1 - (x2 + 47) = 0
        let x = Array1::<f64>::from_vec(vec![100.0, 53.0]);
        assert!(Eggholder::gradient(&x).unwrap().iter().all(|g| g.is_nan()));
    }
}

//! Levy test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Levy function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-10, 10]
pub struct Levy;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "levy",
    description: "Sinusoidally perturbed quadratic in the shifted variables w_i = 1 + (x_i - 1)/4",
    math: r"f(\mathbf{x}) = \sin^2(\pi w_1) + \sum_{i=1}^{n-1} (w_i - 1)^2\left[1 + 10\sin^2(\pi w_i + 1)\right] + (w_n - 1)^2\left[1 + \sin^2(2\pi w_n)\right]",
    source: "Laguna & Marti (2005), Experimental Testing of Advanced Scatter Search Designs for Global Optimization of Multimodal Functions",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fill(0.0),
    min_position: Point::Fill(1.0),
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

fn shifted<T: Scalar>(xi: T) -> T {
    T::one() + (xi - T::one()) / T::lit(4.0)
}

impl Benchmark for Levy {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let n = x.len();
        let pi = T::PI();
        let ten = T::lit(10.0);
        let w_first = shifted(x[0]);
        let w_last = shifted(x[n - 1]);

        let inner = (0..n - 1).fold(T::zero(), |acc, i| {
            let w = shifted(x[i]);
            acc + (w - T::one()).powi(2) * (T::one() + ten * (pi * w + T::one()).sin().powi(2))
        });
        let tail = (w_last - T::one()).powi(2) * (T::one() + (T::TAU() * w_last).sin().powi(2));

        (pi * w_first).sin().powi(2) + inner + tail
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let n = x.len();
        let pi = T::PI();
        let two = T::lit(2.0);
        let ten = T::lit(10.0);
        // dw/dx = 1/4
        let quarter = T::lit(0.25);
        let mut grad = Array1::zeros(n);

        let w_first = shifted(x[0]);
        grad[0] = pi * (T::TAU() * w_first).sin();

        for i in 0..n - 1 {
            let w = shifted(x[i]);
            let u = pi * w + T::one();
            let dw = two * (w - T::one()) * (T::one() + ten * u.sin().powi(2))
                + (w - T::one()).powi(2) * ten * pi * (two * u).sin();
            grad[i] = grad[i] + dw;
        }

        let w_last = shifted(x[n - 1]);
        let v = T::TAU() * w_last;
        grad[n - 1] = grad[n - 1]
            + two * (w_last - T::one()) * (T::one() + v.sin().powi(2))
            + (w_last - T::one()).powi(2) * T::TAU() * (two * v).sin();

        grad.mapv(|g| g * quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levy_minimum() {
        for n in 1..=4 {
            let x = Array1::<f64>::from_elem(n, 1.0);
            assert!(Levy::evaluate(&x).unwrap().abs() < 1e-15);
            assert!(Levy::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-12));
        }
    }

    #[test]
    fn test_levy_gradient_against_dual() {
        use crate::TestFunction;
        let tf = TestFunction::of::<Levy>();
        let x = Array1::<f64>::from_vec(vec![-3.3, 0.4, 7.1]);
        let analytic = tf.gradient(&x).unwrap();
        let ad = tf.ad_gradient(&x).unwrap();
        for (a, b) in analytic.iter().zip(ad.iter()) {
            assert!((a - b).abs() < 1e-10, "{a} vs {b}");
        }
    }
}

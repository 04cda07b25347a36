//! Ackley test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::scalar::norm;
use crate::{Benchmark, Scalar};

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
///
/// The exponential cone term is not differentiable at the origin; the
/// gradient there is reported as the zero subgradient.
pub struct Ackley;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "ackley",
    description: "Nearly flat outer region with a deep central funnel and many local minima",
    math: r"f(\mathbf{x}) = -20 \exp\left(-0.2 \sqrt{\tfrac{1}{n}\sum x_i^2}\right) - \exp\left(\tfrac{1}{n}\sum \cos(2\pi x_i)\right) + 20 + e",
    source: "Ackley (1987), A Connectionist Machine for Genetic Hillclimbing",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-32.768),
    upper_bound: Point::Fill(32.768),
    start: Point::Fill(1.0),
    min_position: Point::Fill(0.0),
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

impl Benchmark for Ackley {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let n = T::idx(x.len());
        let sum_sq = x.iter().fold(T::zero(), |acc, &xi| acc + xi * xi);
        let sum_cos = x
            .iter()
            .fold(T::zero(), |acc, &xi| acc + (T::TAU() * xi).cos());

        -T::lit(20.0) * (-T::lit(0.2) * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
            + T::lit(20.0)
            + T::E()
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let len = x.len();
        let n = T::idx(len);
        let r = norm(x);
        if r == T::zero() {
            return Array1::zeros(len);
        }
        let rms = r / n.sqrt();
        let cone = T::lit(4.0) * (-T::lit(0.2) * rms).exp() / (n * rms);
        let sum_cos = x
            .iter()
            .fold(T::zero(), |acc, &xi| acc + (T::TAU() * xi).cos());
        let wave = (sum_cos / n).exp() * T::TAU() / n;

        x.mapv(|xi| cone * xi + wave * (T::TAU() * xi).sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ackley_minimum() {
        let x = Array1::<f64>::from_vec(vec![0.0; 5]);
        assert!(Ackley::evaluate(&x).unwrap().abs() < 1e-12);
        assert_eq!(Ackley::gradient(&x).unwrap().to_vec(), vec![0.0; 5]);
    }

    #[test]
    fn test_ackley_gradient_against_dual() {
        use crate::TestFunction;
        let tf = TestFunction::of::<Ackley>();
        let x = Array1::<f64>::from_vec(vec![0.3, -1.7, 2.2]);
        let analytic = tf.gradient(&x).unwrap();
        let ad = tf.ad_gradient(&x).unwrap();
        for (a, b) in analytic.iter().zip(ad.iter()) {
            assert!((a - b).abs() < 1e-10, "{a} vs {b}");
        }
    }
}

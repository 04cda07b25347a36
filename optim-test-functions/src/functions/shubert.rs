//! Shubert test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Shubert function - 2D, 18 global minima among 760 local ones
/// Global minimum: f(x) = -186.73090883102378 at x = (-7.0835064076515596, 4.8580568788598255)
/// Bounds: x_i in [-10, 10]
pub struct Shubert;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "shubert",
    description: "Product of two cosine harmonic sums, highly multimodal",
    math: r"f(\mathbf{x}) = \prod_{k=1}^{2} \sum_{j=1}^{5} j \cos\left((j+1) x_k + j\right)",
    source: "Shubert (1972), A Sequential Method Seeking the Global Maximum of a Function",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-10.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[-7.0835064076515596, 4.8580568788598255]),
    min_value: MinValue::Constant(-186.73090883102378),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::HighlyMultimodal,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

/// `(sum, d sum / d x)` of the harmonic sum in one coordinate.
fn harmonics<T: Scalar>(x: T) -> (T, T) {
    (1..=5).fold((T::zero(), T::zero()), |(value, slope), j| {
        let jf = T::idx(j);
        let (s, c) = ((jf + T::one()) * x + jf).sin_cos();
        (value + jf * c, slope - jf * (jf + T::one()) * s)
    })
}

impl Benchmark for Shubert {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        harmonics(x[0]).0 * harmonics(x[1]).0
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (g1, d1) = harmonics(x[0]);
        let (g2, d2) = harmonics(x[1]);
        Array1::from_vec(vec![d1 * g2, g1 * d2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shubert_known_properties() {
        let x = Array1::<f64>::from_vec(vec![-7.0835064076515596, 4.8580568788598255]);
        let value = Shubert::evaluate(&x).unwrap();
        assert!((value + 186.73090883102378).abs() < 1e-9);
        assert!(Shubert::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-6));

        // the minima repeat with period 2π in each coordinate
        let shifted = Array1::<f64>::from_vec(vec![-7.0835064076515596 + std::f64::consts::TAU, 4.8580568788598255]);
        assert!((Shubert::evaluate(&shifted).unwrap() - value).abs() < 1e-9);
    }
}

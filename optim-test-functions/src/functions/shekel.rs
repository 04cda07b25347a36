//! Shekel test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Shekel function (m = 10) - 4D, ten inverse-quadratic foxholes
/// Global minimum: f(x) = -10.536409816692041 at x ≈ (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
pub struct Shekel;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "shekel",
    description: "Ten foxholes of different depths; the deepest is near (4, 4, 4, 4)",
    math: r"f(\mathbf{x}) = -\sum_{i=1}^{10} \left(\sum_{j=1}^{4}(x_j - C_{ji})^2 + \beta_i\right)^{-1}",
    source: "Shekel (1971), Test Functions for Multimodal Search Techniques",
    arity: Arity::Fixed(4),
    lower_bound: Point::Fill(0.0),
    upper_bound: Point::Fill(10.0),
    start: Point::Fixed(&[2.0, 2.0, 2.0, 2.0]),
    min_position: Point::Fixed(&[
        4.0007465315920467,
        4.000592934138532,
        3.9996633980403223,
        3.9995098005868076,
    ]),
    min_value: MinValue::Constant(-10.536409816692041),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::FiniteAtInf,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::Limit(0.0),
    literature: None,
};

const BETA: [f64; 10] = [0.1, 0.2, 0.2, 0.4, 0.4, 0.6, 0.3, 0.7, 0.5, 0.5];

const CENTERS: [[f64; 4]; 10] = [
    [4.0, 4.0, 4.0, 4.0],
    [1.0, 1.0, 1.0, 1.0],
    [8.0, 8.0, 8.0, 8.0],
    [6.0, 6.0, 6.0, 6.0],
    [3.0, 7.0, 3.0, 7.0],
    [2.0, 9.0, 2.0, 9.0],
    [5.0, 5.0, 3.0, 3.0],
    [8.0, 1.0, 8.0, 1.0],
    [6.0, 2.0, 6.0, 2.0],
    [7.0, 3.6, 7.0, 3.6],
];

fn denominator<T: Scalar>(i: usize, x: &Array1<T>) -> T {
    CENTERS[i]
        .iter()
        .zip(x.iter())
        .fold(T::lit(BETA[i]), |acc, (&c, &xj)| acc + (xj - T::lit(c)).powi(2))
}

impl Benchmark for Shekel {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        -(0..CENTERS.len()).fold(T::zero(), |acc, i| acc + denominator(i, x).recip())
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let mut grad = Array1::zeros(4);
        for (i, center) in CENTERS.iter().enumerate() {
            let d = denominator(i, x);
            let weight = T::lit(2.0) / (d * d);
            for j in 0..4 {
                grad[j] = grad[j] + weight * (x[j] - T::lit(center[j]));
            }
        }
        grad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shekel_known_properties() {
        let x = Array1::<f64>::from_vec(vec![
            4.0007465315920467,
            4.000592934138532,
            3.9996633980403223,
            3.9995098005868076,
        ]);
        let value = Shekel::evaluate(&x).unwrap();
        assert!((value + 10.536409816692041).abs() < 1e-12);
        assert!(Shekel::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-8));
    }

    #[test]
    fn test_shekel_vanishes_far_away() {
        let x = Array1::<f64>::from_vec(vec![f64::INFINITY, 0.0, 0.0, 0.0]);
        assert_eq!(Shekel::evaluate(&x), Ok(0.0));
    }
}

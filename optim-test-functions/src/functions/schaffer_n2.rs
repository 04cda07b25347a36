//! Schaffer N.2 test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Schaffer N.2 function - 2D, oscillating ridges along the diagonals
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub struct SchafferN2;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "schaffer_n2",
    description: "Squared sine of x1^2 - x2^2, damped toward 0.5 with distance",
    math: r"f(\mathbf{x}) = 0.5 + \frac{\sin^2(x_1^2 - x_2^2) - 0.5}{\left[1 + 0.001(x_1^2 + x_2^2)\right]^2}",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-100.0),
    upper_bound: Point::Fill(100.0),
    start: Point::Fixed(&[1.0, 2.0]),
    min_position: Point::Fixed(&[0.0, 0.0]),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::FiniteAtInf,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::Limit(0.5),
    literature: None,
};

impl Benchmark for SchafferN2 {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        let half = T::lit(0.5);
        let damping = T::one() + T::lit(0.001) * (x1 * x1 + x2 * x2);
        half + ((x1 * x1 - x2 * x2).sin().powi(2) - half) / damping.powi(2)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let (s, c) = (x1 * x1 - x2 * x2).sin_cos();
        let damping = T::one() + T::lit(0.001) * (x1 * x1 + x2 * x2);
        let ripple = s * s - T::lit(0.5);
        let d_ripple = T::lit(4.0) * s * c / damping.powi(2);
        let d_damping = T::lit(0.004) * ripple / damping.powi(3);
        Array1::from_vec(vec![
            x1 * (d_ripple - d_damping),
            -x2 * (d_ripple + d_damping),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schaffer_n2_known_properties() {
        let x = Array1::<f64>::from_vec(vec![0.0, 0.0]);
        assert_eq!(SchafferN2::evaluate(&x), Ok(0.0));
        assert_eq!(SchafferN2::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);

        let x = Array1::<f64>::from_vec(vec![f64::NEG_INFINITY, 3.0]);
        assert_eq!(SchafferN2::evaluate(&x), Ok(0.5));
        assert_eq!(SchafferN2::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);
    }
}

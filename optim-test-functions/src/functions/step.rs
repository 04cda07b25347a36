//! Step test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Step function - discontinuous, piecewise constant
/// Global minimum: f(x) = 0 for every x in [-0.5, 0.5)^n
/// Bounds: x_i in [-100, 100]
///
/// The function is flat between jumps, so the gradient is zero everywhere,
/// including at the jump points where no derivative exists.
pub struct Step;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "step",
    description: "Sum of squared rounded coordinates: plateaus separated by jumps",
    math: r"f(\mathbf{x}) = \sum_{i=1}^{n} \lfloor x_i + 0.5 \rfloor^2",
    source: "De Jong (1975), An Analysis of the Behavior of a Class of Genetic Adaptive Systems",
    arity: Arity::Scalable { min: 1, default: 2 },
    lower_bound: Point::Fill(-100.0),
    upper_bound: Point::Fill(100.0),
    start: Point::Fill(3.7),
    min_position: Point::Fill(0.0),
    min_value: MinValue::Constant(0.0),
    properties: &[
        Property::Bounded,
        Property::PartiallyDifferentiable,
        Property::Scalable,
        Property::Separable,
        Property::Unimodal,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for Step {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        x.iter()
            .fold(T::zero(), |acc, &xi| acc + (xi + T::lit(0.5)).floor().powi(2))
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        Array1::zeros(x.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_plateaus() {
        assert_eq!(Step::evaluate(&Array1::<f64>::from_vec(vec![0.49, -0.5])), Ok(0.0));
        // 0.5 already rounds up to the next plateau
        assert_eq!(Step::evaluate(&Array1::<f64>::from_vec(vec![0.5, 0.0])), Ok(1.0));
        assert_eq!(Step::evaluate(&Array1::<f64>::from_vec(vec![3.7, -2.2])), Ok(20.0));
    }

    #[test]
    fn test_step_gradient_is_zero_at_jumps() {
        let x = Array1::<f64>::from_vec(vec![0.5, -1.5]);
        assert_eq!(Step::gradient(&x).unwrap().to_vec(), vec![0.0, 0.0]);
    }
}

//! Modified Rosenbrock test function

use ndarray::Array1;

use crate::metadata::{
    Arity, AtInfinity, FunctionMetadata, LiteratureNote, MinValue, Point, Property,
};
use crate::{Benchmark, Scalar};

/// Modified Rosenbrock function - 2D, Rosenbrock valley with a Gaussian pit
/// Global minimum: f(x) = 34.04024310664062 at x = (-0.9095537365026207, -0.9505717126590494)
/// Bounds: x_i in [-2, 2]
///
/// The pit near (-1, -1) is deeper than the valley end at (1, 1), which
/// keeps its classic value of 74 as a local minimum.
pub struct RosenbrockModified;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "rosenbrock_modified",
    description: "Rosenbrock valley offset by 74 with a Gaussian well that holds the global minimum",
    math: r"f(\mathbf{x}) = 74 + 100(x_2 - x_1^2)^2 + (1 - x_1)^2 - 400\exp\left(-\frac{(x_1+1)^2 + (x_2+1)^2}{0.1}\right)",
    source: "Jamil & Yang (2013), A Literature Survey of Benchmark Functions for Global Optimization Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-2.0),
    upper_bound: Point::Fill(2.0),
    start: Point::Fixed(&[0.0, 0.0]),
    min_position: Point::Fixed(&[-0.9095537365026207, -0.9505717126590494]),
    min_value: MinValue::Constant(34.04024310664062),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Controversial,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: Some(LiteratureNote {
        reported_value: 34.37,
        reported_position: &[-0.9, -0.95],
        remark: "the reported point evaluates to 34.3712; refinement of the Gaussian \
                 well yields 34.04024310664062",
    }),
};

impl Benchmark for RosenbrockModified {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        let pit = (-((x1 + T::one()).powi(2) + (x2 + T::one()).powi(2)) / T::lit(0.1)).exp();
        T::lit(74.0) + T::lit(100.0) * (x2 - x1 * x1).powi(2) + (T::one() - x1).powi(2)
            - T::lit(400.0) * pit
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let pit = (-((x1 + T::one()).powi(2) + (x2 + T::one()).powi(2)) / T::lit(0.1)).exp();
        let valley = x2 - x1 * x1;
        Array1::from_vec(vec![
            -T::lit(400.0) * x1 * valley - T::lit(2.0) * (T::one() - x1)
                + T::lit(8000.0) * (x1 + T::one()) * pit,
            T::lit(200.0) * valley + T::lit(8000.0) * (x2 + T::one()) * pit,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rosenbrock_modified_minimum() {
        let x = Array1::<f64>::from_vec(vec![-0.9095537365026207, -0.9505717126590494]);
        let value = RosenbrockModified::evaluate(&x).unwrap();
        assert!((value - 34.04024310664062).abs() < 1e-10);
        assert!(RosenbrockModified::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-6));

        let reported = Array1::<f64>::from_vec(vec![-0.9, -0.95]);
        assert!(RosenbrockModified::evaluate(&reported).unwrap() > 34.37);
    }

    #[test]
    fn test_rosenbrock_modified_valley_end_is_local() {
        let x = Array1::<f64>::from_vec(vec![1.0, 1.0]);
        assert!((RosenbrockModified::evaluate(&x).unwrap() - 74.0).abs() < 1e-12);
    }
}

//! Six-Hump Camel test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Six-Hump Camel function - 2D, two symmetric global minima
/// Global minimum: f(x) = -1.0316284534898774 at x = ±(0.0898420131003181, -0.7126564030207396)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub struct SixHumpCamel;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "six_hump_camel",
    description: "Six local minima, two of them global and point-symmetric",
    math: r"f(\mathbf{x}) = \left(4 - 2.1x_1^2 + \frac{x_1^4}{3}\right)x_1^2 + x_1x_2 + (-4 + 4x_2^2)x_2^2",
    source: "Dixon & Szego (1978), The Global Optimization Problem: An Introduction",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fixed(&[-3.0, -2.0]),
    upper_bound: Point::Fixed(&[3.0, 2.0]),
    start: Point::Fixed(&[-1.0, 1.0]),
    min_position: Point::Fixed(&[0.08984201310031806, -0.7126564030207396]),
    min_value: MinValue::Constant(-1.0316284534898774),
    properties: &[
        Property::Bounded,
        Property::Continuous,
        Property::Differentiable,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
    ],
    at_infinity: AtInfinity::PositiveInfinity,
    literature: None,
};

impl Benchmark for SixHumpCamel {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        (T::lit(4.0) - T::lit(2.1) * x1.powi(2) + x1.powi(4) / T::lit(3.0)) * x1.powi(2)
            + x1 * x2
            + (T::lit(-4.0) + T::lit(4.0) * x2.powi(2)) * x2.powi(2)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        Array1::from_vec(vec![
            T::lit(8.0) * x1 - T::lit(8.4) * x1.powi(3) + T::lit(2.0) * x1.powi(5) + x2,
            x1 - T::lit(8.0) * x2 + T::lit(16.0) * x2.powi(3),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_hump_camel_symmetric_minima() {
        let a = Array1::<f64>::from_vec(vec![0.08984201310031806, -0.7126564030207396]);
        let b = a.mapv(|v| -v);
        for x in [a, b] {
            let value = SixHumpCamel::evaluate(&x).unwrap();
            assert!((value + 1.0316284534898774).abs() < 1e-12);
            assert!(SixHumpCamel::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-9));
        }
    }
}

//! Hartmann 3-D test function

use ndarray::Array1;

use crate::metadata::{Arity, AtInfinity, FunctionMetadata, MinValue, Point, Property};
use crate::{Benchmark, Scalar};

/// Hartmann 3-D function - 3D, four Gaussian wells in the unit cube
/// Global minimum: f(x) = -3.8627797873326627 at x = (0.11458887665506896, 0.55564889461693005, 0.85254698468667744)
/// Bounds: x_i in [0, 1]
pub struct Hartmann3D;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "hartmann_3d",
    description: "Weighted sum of four anisotropic Gaussian wells",
    math: r"f(\mathbf{x}) = -\sum_{i=1}^{4} \alpha_i \exp\left(-\sum_{j=1}^{3} A_{ij}(x_j - P_{ij})^2\right)",
    source: "Dixon & Szego (1978), The Global Optimization Problem: An Introduction",
    arity: Arity::Fixed(3),
    lower_bound: Point::Fill(0.0),
    upper_bound: Point::Fill(1.0),
    start: Point::Fixed(&[0.5, 0.5, 0.5]),
    min_position: Point::Fixed(&[0.11458887665506896, 0.55564889461693005, 0.85254698468667744]),
    min_value: MinValue::Constant(-3.8627797873326627),
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

const ALPHA: [f64; 4] = [1.0, 1.2, 3.0, 3.2];

const A: [[f64; 3]; 4] = [
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
];

const P: [[f64; 3]; 4] = [
    [0.3689, 0.1170, 0.2673],
    [0.4699, 0.4387, 0.7470],
    [0.1091, 0.8732, 0.5547],
    [0.0381, 0.5743, 0.8828],
];

/// Weighted height of well `i` at `x`.
fn well<T: Scalar>(i: usize, x: &Array1<T>) -> T {
    let exponent = (0..3).fold(T::zero(), |acc, j| {
        acc + T::lit(A[i][j]) * (x[j] - T::lit(P[i][j])).powi(2)
    });
    T::lit(ALPHA[i]) * (-exponent).exp()
}

impl Benchmark for Hartmann3D {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        -(0..4).fold(T::zero(), |acc, i| acc + well(i, x))
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let mut grad = Array1::zeros(3);
        for i in 0..4 {
            let w = well(i, x);
            for j in 0..3 {
                grad[j] = grad[j] + T::lit(2.0 * A[i][j]) * (x[j] - T::lit(P[i][j])) * w;
            }
        }
        grad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hartmann_3d_known_properties() {
        let x = Array1::<f64>::from_vec(vec![0.11458887665506896, 0.55564889461693005, 0.85254698468667744]);
        let value = Hartmann3D::evaluate(&x).unwrap();
        assert!((value + 3.8627797873326627).abs() < 1e-12);
        assert!(Hartmann3D::gradient(&x).unwrap().iter().all(|g| g.abs() < 1e-8));

        // the frequently quoted point is within 1e-5 of the optimum
        let quoted = Array1::<f64>::from_vec(vec![0.114614, 0.555649, 0.852547]);
        assert!((Hartmann3D::evaluate(&quoted).unwrap() - value).abs() < 1e-5);
    }
}

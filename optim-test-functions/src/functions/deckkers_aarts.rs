//! Deckkers-Aarts test function

use ndarray::Array1;

use crate::metadata::{
    Arity, AtInfinity, FunctionMetadata, LiteratureNote, MinValue, Point, Property,
};
use crate::{Benchmark, Scalar};

/// Deckkers-Aarts function - 2D, two symmetric deep minima on the x2 axis
/// Global minimum: f(x) = -24776.518342317686 at x = (0, ±14.945112151891958)
/// Bounds: x_i in [-20, 20]
pub struct DeckkersAarts;

static METADATA: FunctionMetadata = FunctionMetadata {
    name: "deckkers_aarts",
    description: "Steep quadratic in x1 against a radial quartic well",
    math: r"f(\mathbf{x}) = 10^5 x_1^2 + x_2^2 - (x_1^2 + x_2^2)^2 + 10^{-5}(x_1^2 + x_2^2)^4",
    source: "Ali, Khompatraporn & Zabinsky (2005), A Numerical Evaluation of Several Stochastic Algorithms on Selected Continuous Global Optimization Test Problems",
    arity: Arity::Fixed(2),
    lower_bound: Point::Fill(-20.0),
    upper_bound: Point::Fill(20.0),
    start: Point::Fixed(&[1.0, 1.0]),
    min_position: Point::Fixed(&[0.0, 14.945112151891958]),
    min_value: MinValue::Constant(-24776.518342317686),
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
        reported_value: -24777.0,
        reported_position: &[0.0, 15.0],
        remark: "the reported point evaluates to -24771.09375; the stationary point \
                 on the x2 axis is at 14.945112151891958",
    }),
};

impl Benchmark for DeckkersAarts {
    fn metadata() -> &'static FunctionMetadata {
        &METADATA
    }

    fn raw_value<T: Scalar>(x: &Array1<T>) -> T {
        let (x1, x2) = (x[0], x[1]);
        let r = x1 * x1 + x2 * x2;
        T::lit(1e5) * x1 * x1 + x2 * x2 - r * r + T::lit(1e-5) * r.powi(4)
    }

    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T> {
        let (x1, x2) = (x[0], x[1]);
        let r = x1 * x1 + x2 * x2;
        // shared radial part of d/dx_i
        let radial = -T::lit(4.0) * r + T::lit(8e-5) * r.powi(3);
        Array1::from_vec(vec![
            T::lit(2e5) * x1 + radial * x1,
            T::lit(2.0) * x2 + radial * x2,
        ])
    }
}

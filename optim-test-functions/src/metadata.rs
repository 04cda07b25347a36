//! Metadata records describing each test function
//!
//! Every function module owns one `static` [`FunctionMetadata`]. Points and
//! bounds are described symbolically ([`Point`]) so the same record serves
//! fixed-arity functions and scalable ones.

use crate::error::{Result, TestFunctionError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimensions a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many components.
    Fixed(usize),
    /// Any number of components from `min` upwards; `default` is the
    /// dimension used when a caller has no preference.
    Scalable {
        /// Smallest supported dimension
        min: usize,
        /// Recommended dimension
        default: usize,
    },
}

impl Arity {
    /// Validates an input length for `function`.
    pub fn check(&self, function: &'static str, len: usize) -> Result<()> {
        if len == 0 {
            return Err(TestFunctionError::EmptyInput { function });
        }
        match *self {
            Arity::Fixed(expected) if len != expected => Err(TestFunctionError::DimensionMismatch {
                function,
                expected,
                got: len,
            }),
            Arity::Scalable { min, .. } if len < min => Err(TestFunctionError::DimensionTooSmall {
                function,
                min,
                got: len,
            }),
            _ => Ok(()),
        }
    }

    /// Dimension a metadata accessor should produce when asked for `n`.
    ///
    /// Fixed-arity functions ignore `n`; scalable ones reject `n < min`.
    pub fn resolve(&self, function: &'static str, n: usize) -> Result<usize> {
        match *self {
            Arity::Fixed(k) => Ok(k),
            Arity::Scalable { min, .. } if n < min => {
                Err(TestFunctionError::DimensionTooSmall { function, min, got: n })
            }
            Arity::Scalable { .. } => Ok(n),
        }
    }

    /// Dimension used when the caller does not pick one.
    pub fn default_dimension(&self) -> usize {
        match *self {
            Arity::Fixed(k) => k,
            Arity::Scalable { default, .. } => default,
        }
    }

    /// Smallest accepted dimension.
    pub fn min_dimension(&self) -> usize {
        match *self {
            Arity::Fixed(k) => k,
            Arity::Scalable { min, .. } => min,
        }
    }

    /// Whether the function accepts more than one dimension.
    pub fn is_scalable(&self) -> bool {
        matches!(self, Arity::Scalable { .. })
    }
}

/// A point (or bound vector) as a function of the dimension.
#[derive(Debug, Clone, Copy)]
pub enum Point {
    /// Every component equals the value.
    Fill(f64),
    /// Explicit coordinates, for fixed-arity functions.
    Fixed(&'static [f64]),
    /// Coordinates computed from the dimension.
    Generated(fn(usize) -> Vec<f64>),
}

impl Point {
    /// Materializes the point in dimension `n` (ignored for `Fixed`).
    pub fn at(&self, n: usize) -> Array1<f64> {
        match *self {
            Point::Fill(value) => Array1::from_elem(n, value),
            Point::Fixed(coords) => Array1::from_vec(coords.to_vec()),
            Point::Generated(generate) => Array1::from_vec(generate(n)),
        }
    }
}

/// Global minimum value as a function of the dimension.
#[derive(Debug, Clone, Copy)]
pub enum MinValue {
    /// Independent of the dimension.
    Constant(f64),
    /// `value * n`, for separable sums of identical terms.
    PerDimension(f64),
    /// Computed from the dimension.
    Generated(fn(usize) -> f64),
}

impl MinValue {
    /// Value of the global minimum in dimension `n`.
    pub fn at(&self, n: usize) -> f64 {
        match *self {
            MinValue::Constant(value) => value,
            MinValue::PerDimension(value) => value * n as f64,
            MinValue::Generated(generate) => generate(n),
        }
    }
}

/// Documented result for inputs with an infinite component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtInfinity {
    /// `evaluate` returns +Inf, `gradient` returns +Inf in every component.
    PositiveInfinity,
    /// `evaluate` returns -Inf, `gradient` returns +Inf in every component.
    NegativeInfinity,
    /// The function tends to a finite constant: `evaluate` returns it and
    /// `gradient` returns zeros.
    Limit(f64),
}

impl AtInfinity {
    /// The documented function value.
    pub fn value(&self) -> f64 {
        match *self {
            AtInfinity::PositiveInfinity => f64::INFINITY,
            AtInfinity::NegativeInfinity => f64::NEG_INFINITY,
            AtInfinity::Limit(value) => value,
        }
    }

    /// The documented value of every gradient component.
    pub fn gradient_component(&self) -> f64 {
        match *self {
            AtInfinity::PositiveInfinity | AtInfinity::NegativeInfinity => f64::INFINITY,
            AtInfinity::Limit(_) => 0.0,
        }
    }
}

/// A global minimum reported in the literature that does not survive
/// numerical verification. The record keeps both facts; `min_value` and
/// `min_position` hold the verified ones.
#[derive(Debug, Clone, Copy)]
pub struct LiteratureNote {
    /// Value as printed in the cited source
    pub reported_value: f64,
    /// Position as printed in the cited source (empty if none was given)
    pub reported_position: &'static [f64],
    /// What differs and how the verified value was obtained
    pub remark: &'static str,
}

/// Classification tags from a fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Property {
    #[serde(rename = "bounded")]
    Bounded,
    #[serde(rename = "continuous")]
    Continuous,
    #[serde(rename = "controversial")]
    Controversial,
    #[serde(rename = "convex")]
    Convex,
    #[serde(rename = "deceptive")]
    Deceptive,
    #[serde(rename = "differentiable")]
    Differentiable,
    #[serde(rename = "finite_at_inf")]
    FiniteAtInf,
    #[serde(rename = "fully non-separable")]
    FullyNonSeparable,
    #[serde(rename = "has_noise")]
    HasNoise,
    #[serde(rename = "highly multimodal")]
    HighlyMultimodal,
    #[serde(rename = "ill-conditioned")]
    IllConditioned,
    #[serde(rename = "multimodal")]
    Multimodal,
    #[serde(rename = "non-convex")]
    NonConvex,
    #[serde(rename = "non-separable")]
    NonSeparable,
    #[serde(rename = "partially differentiable")]
    PartiallyDifferentiable,
    #[serde(rename = "partially separable")]
    PartiallySeparable,
    #[serde(rename = "quasi-convex")]
    QuasiConvex,
    #[serde(rename = "scalable")]
    Scalable,
    #[serde(rename = "separable")]
    Separable,
    #[serde(rename = "strongly convex")]
    StronglyConvex,
    #[serde(rename = "unimodal")]
    Unimodal,
}

impl Property {
    /// Every tag of the vocabulary.
    pub const ALL: [Property; 21] = [
        Property::Bounded,
        Property::Continuous,
        Property::Controversial,
        Property::Convex,
        Property::Deceptive,
        Property::Differentiable,
        Property::FiniteAtInf,
        Property::FullyNonSeparable,
        Property::HasNoise,
        Property::HighlyMultimodal,
        Property::IllConditioned,
        Property::Multimodal,
        Property::NonConvex,
        Property::NonSeparable,
        Property::PartiallyDifferentiable,
        Property::PartiallySeparable,
        Property::QuasiConvex,
        Property::Scalable,
        Property::Separable,
        Property::StronglyConvex,
        Property::Unimodal,
    ];

    /// Canonical spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Bounded => "bounded",
            Property::Continuous => "continuous",
            Property::Controversial => "controversial",
            Property::Convex => "convex",
            Property::Deceptive => "deceptive",
            Property::Differentiable => "differentiable",
            Property::FiniteAtInf => "finite_at_inf",
            Property::FullyNonSeparable => "fully non-separable",
            Property::HasNoise => "has_noise",
            Property::HighlyMultimodal => "highly multimodal",
            Property::IllConditioned => "ill-conditioned",
            Property::Multimodal => "multimodal",
            Property::NonConvex => "non-convex",
            Property::NonSeparable => "non-separable",
            Property::PartiallyDifferentiable => "partially differentiable",
            Property::PartiallySeparable => "partially separable",
            Property::QuasiConvex => "quasi-convex",
            Property::Scalable => "scalable",
            Property::Separable => "separable",
            Property::StronglyConvex => "strongly convex",
            Property::Unimodal => "unimodal",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = TestFunctionError;

    fn from_str(s: &str) -> Result<Self> {
        Property::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| TestFunctionError::UnknownProperty { name: s.to_string() })
    }
}

/// Static description of one test function.
#[derive(Debug, Clone, Copy)]
pub struct FunctionMetadata {
    /// Unique lowercase identifier, also the catalog key
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// LaTeX formula
    pub math: &'static str,
    /// Literature citation
    pub source: &'static str,
    /// Accepted dimensions
    pub arity: Arity,
    /// Componentwise lower box bound
    pub lower_bound: Point,
    /// Componentwise upper box bound
    pub upper_bound: Point,
    /// Default initial point, deliberately not the optimum
    pub start: Point,
    /// A location of the global minimum
    pub min_position: Point,
    /// Value of the global minimum (verified value if the literature is wrong)
    pub min_value: MinValue,
    /// Classification tags
    pub properties: &'static [Property],
    /// Result for inputs with an infinite component
    pub at_infinity: AtInfinity,
    /// Literature discrepancy, if any
    pub literature: Option<LiteratureNote>,
}

impl FunctionMetadata {
    /// Whether the record carries the tag.
    pub fn has_property(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_check() {
        let fixed = Arity::Fixed(2);
        assert!(fixed.check("beale", 2).is_ok());
        assert_eq!(
            fixed.check("beale", 3),
            Err(TestFunctionError::DimensionMismatch {
                function: "beale",
                expected: 2,
                got: 3
            })
        );
        assert_eq!(
            fixed.check("beale", 0),
            Err(TestFunctionError::EmptyInput { function: "beale" })
        );

        let scalable = Arity::Scalable { min: 2, default: 2 };
        assert!(scalable.check("rosenbrock", 7).is_ok());
        assert!(scalable.check("rosenbrock", 1).unwrap_err().is_dimension_error());
        assert!(!scalable.check("rosenbrock", 0).unwrap_err().is_dimension_error());
    }

    #[test]
    fn test_arity_resolve() {
        assert_eq!(Arity::Fixed(4).resolve("colville", 10), Ok(4));
        let scalable = Arity::Scalable { min: 2, default: 2 };
        assert_eq!(scalable.resolve("trid", 5), Ok(5));
        assert!(scalable.resolve("trid", 1).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_point_at() {
        assert_eq!(Point::Fill(1.5).at(3).to_vec(), vec![1.5, 1.5, 1.5]);
        assert_eq!(Point::Fixed(&[1.0, 3.0]).at(9).to_vec(), vec![1.0, 3.0]);
        let generated = Point::Generated(|n| (1..=n).map(|i| i as f64).collect());
        assert_eq!(generated.at(3).to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_min_value_at() {
        assert_eq!(MinValue::Constant(-1.0).at(5), -1.0);
        assert_eq!(MinValue::PerDimension(-0.1).at(4), -0.4);
        assert_eq!(MinValue::Generated(|n| -(n as f64)).at(3), -3.0);
    }

    #[test]
    fn test_property_round_trip() {
        for property in Property::ALL {
            assert_eq!(property.as_str().parse::<Property>(), Ok(property));
            let json = serde_json::to_string(&property).unwrap();
            assert_eq!(json, format!("\"{}\"", property.as_str()));
        }
        assert_eq!(
            "smooth".parse::<Property>(),
            Err(TestFunctionError::UnknownProperty {
                name: "smooth".to_string()
            })
        );
        assert!("Convex".parse::<Property>().unwrap_err().is_lookup_error());
    }

    #[test]
    fn test_at_infinity() {
        assert_eq!(AtInfinity::PositiveInfinity.value(), f64::INFINITY);
        assert_eq!(AtInfinity::NegativeInfinity.gradient_component(), f64::INFINITY);
        assert_eq!(AtInfinity::Limit(0.5).value(), 0.5);
        assert_eq!(AtInfinity::Limit(0.5).gradient_component(), 0.0);
    }
}

//! The uniform test-function record
//!
//! A benchmark is implemented once through the [`Benchmark`] trait: a
//! closed-form value, a closed-form gradient and a static metadata record.
//! The provided `evaluate` / `gradient` methods apply the shared input
//! contract in this order:
//!
//! 1. empty input is rejected
//! 2. the length must satisfy the declared [`Arity`](crate::metadata::Arity)
//! 3. any NaN component returns NaN (or a NaN vector)
//! 4. any infinite component returns the documented
//!    [`AtInfinity`](crate::metadata::AtInfinity) result
//! 5. otherwise the formula runs
//!
//! [`TestFunction`] erases the concrete benchmark type into a `Copy` record
//! holding the `f64` and `Dual<f64>` instantiations, which is what the
//! catalog stores.

use crate::dual::{self, Dual};
use crate::error::Result;
use crate::metadata::{FunctionMetadata, Property};
use crate::scalar::{any_infinite, any_nan, Scalar};
use ndarray::{Array1, Array2};
use serde::Serialize;

/// A benchmark objective with an analytic gradient.
pub trait Benchmark {
    /// Static description of the function.
    fn metadata() -> &'static FunctionMetadata;

    /// Closed-form value. Only called with validated, finite input.
    fn raw_value<T: Scalar>(x: &Array1<T>) -> T;

    /// Closed-form gradient. Only called with validated, finite input.
    fn raw_gradient<T: Scalar>(x: &Array1<T>) -> Array1<T>;

    /// Evaluates the function under the shared input contract.
    fn evaluate<T: Scalar>(x: &Array1<T>) -> Result<T> {
        let meta = Self::metadata();
        meta.arity.check(meta.name, x.len())?;
        if any_nan(x) {
            return Ok(T::nan());
        }
        if any_infinite(x) {
            return Ok(T::lit(meta.at_infinity.value()));
        }
        Ok(Self::raw_value(x))
    }

    /// Evaluates the gradient under the shared input contract.
    fn gradient<T: Scalar>(x: &Array1<T>) -> Result<Array1<T>> {
        let meta = Self::metadata();
        meta.arity.check(meta.name, x.len())?;
        if any_nan(x) {
            return Ok(Array1::from_elem(x.len(), T::nan()));
        }
        if any_infinite(x) {
            let component = T::lit(meta.at_infinity.gradient_component());
            return Ok(Array1::from_elem(x.len(), component));
        }
        Ok(Self::raw_gradient(x))
    }
}

/// Runtime handle on one benchmark.
#[derive(Debug, Clone, Copy)]
pub struct TestFunction {
    metadata: &'static FunctionMetadata,
    evaluate: fn(&Array1<f64>) -> Result<f64>,
    gradient: fn(&Array1<f64>) -> Result<Array1<f64>>,
    evaluate_dual: fn(&Array1<Dual<f64>>) -> Result<Dual<f64>>,
}

/// Serializable snapshot of a function's metadata in one dimension.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSummary {
    pub name: &'static str,
    pub dimension: usize,
    pub description: &'static str,
    pub math: &'static str,
    pub source: &'static str,
    pub lower_bound: Vec<f64>,
    pub upper_bound: Vec<f64>,
    pub start: Vec<f64>,
    pub min_position: Vec<f64>,
    pub min_value: f64,
    pub properties: Vec<Property>,
}

impl TestFunction {
    /// Binds a benchmark type into a record.
    pub fn of<B: Benchmark>() -> Self {
        Self {
            metadata: B::metadata(),
            evaluate: B::evaluate::<f64>,
            gradient: B::gradient::<f64>,
            evaluate_dual: B::evaluate::<Dual<f64>>,
        }
    }

    /// Unique catalog name.
    pub fn name(&self) -> &'static str {
        self.metadata.name
    }

    /// The full metadata record.
    pub fn metadata(&self) -> &'static FunctionMetadata {
        self.metadata
    }

    /// Function value at `x`.
    pub fn evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        (self.evaluate)(x)
    }

    /// Analytic gradient at `x`.
    pub fn gradient(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        (self.gradient)(x)
    }

    /// Function value at dual-number input.
    pub fn evaluate_dual(&self, x: &Array1<Dual<f64>>) -> Result<Dual<f64>> {
        (self.evaluate_dual)(x)
    }

    /// Gradient obtained by forward-mode differentiation of `evaluate`.
    ///
    /// Independent of the hand-written gradient, so the two can be compared.
    pub fn ad_gradient(&self, x: &Array1<f64>) -> Result<Array1<f64>> {
        self.metadata.arity.check(self.metadata.name, x.len())?;
        let evaluate = self.evaluate_dual;
        Ok(dual::gradient_of(
            |xd| evaluate(xd).unwrap_or_else(|_| Dual::constant(f64::NAN)),
            x,
        ))
    }

    /// Dimension used when the caller has no preference.
    pub fn default_dimension(&self) -> usize {
        self.metadata.arity.default_dimension()
    }

    /// Lower box bound in dimension `n` (ignored for fixed-arity functions).
    pub fn lower_bound(&self, n: usize) -> Result<Array1<f64>> {
        let n = self.metadata.arity.resolve(self.metadata.name, n)?;
        Ok(self.metadata.lower_bound.at(n))
    }

    /// Upper box bound in dimension `n` (ignored for fixed-arity functions).
    pub fn upper_bound(&self, n: usize) -> Result<Array1<f64>> {
        let n = self.metadata.arity.resolve(self.metadata.name, n)?;
        Ok(self.metadata.upper_bound.at(n))
    }

    /// Default start point in dimension `n`.
    pub fn start(&self, n: usize) -> Result<Array1<f64>> {
        let n = self.metadata.arity.resolve(self.metadata.name, n)?;
        Ok(self.metadata.start.at(n))
    }

    /// A global minimizer in dimension `n`.
    pub fn min_position(&self, n: usize) -> Result<Array1<f64>> {
        let n = self.metadata.arity.resolve(self.metadata.name, n)?;
        Ok(self.metadata.min_position.at(n))
    }

    /// Global minimum value in dimension `n`.
    pub fn min_value(&self, n: usize) -> Result<f64> {
        let n = self.metadata.arity.resolve(self.metadata.name, n)?;
        Ok(self.metadata.min_value.at(n))
    }

    /// Bounds matrix for optimizers (2 x n):
    /// `bounds[[0, i]]` = lower bound, `bounds[[1, i]]` = upper bound
    pub fn bounds_matrix(&self, n: usize) -> Result<Array2<f64>> {
        let lower = self.lower_bound(n)?;
        let upper = self.upper_bound(n)?;
        Ok(Array2::from_shape_fn((2, lower.len()), |(row, i)| {
            if row == 0 {
                lower[i]
            } else {
                upper[i]
            }
        }))
    }

    /// Classification tags.
    pub fn properties(&self) -> &'static [Property] {
        self.metadata.properties
    }

    /// Whether the function carries the tag.
    pub fn has_property(&self, property: Property) -> bool {
        self.metadata.has_property(property)
    }

    /// Metadata snapshot in dimension `n`.
    pub fn summary(&self, n: usize) -> Result<FunctionSummary> {
        let meta = self.metadata;
        let lower_bound = self.lower_bound(n)?;
        Ok(FunctionSummary {
            name: meta.name,
            dimension: lower_bound.len(),
            description: meta.description,
            math: meta.math,
            source: meta.source,
            lower_bound: lower_bound.to_vec(),
            upper_bound: self.upper_bound(n)?.to_vec(),
            start: self.start(n)?.to_vec(),
            min_position: self.min_position(n)?.to_vec(),
            min_value: self.min_value(n)?,
            properties: meta.properties.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{Rosenbrock, Sphere};
    use crate::metadata::AtInfinity;
    use approx::assert_relative_eq;

    #[test]
    fn test_generic_evaluation_per_type() {
        let x64 = Array1::from_vec(vec![3.0_f64, 4.0]);
        let x32 = Array1::from_vec(vec![3.0_f32, 4.0]);
        assert_eq!(Sphere::evaluate(&x64), Ok(25.0));
        assert_eq!(Sphere::evaluate(&x32), Ok(25.0_f32));
        assert_eq!(Sphere::gradient(&x32).unwrap().to_vec(), vec![6.0_f32, 8.0]);
    }

    #[test]
    fn test_validation_precedes_special_values() {
        // wrong length wins over NaN
        let x = Array1::from_vec(vec![f64::NAN]);
        let err = Rosenbrock::evaluate(&x).unwrap_err();
        assert!(err.is_dimension_error());

        let empty: Array1<f64> = Array1::from_vec(vec![]);
        assert!(Sphere::gradient(&empty).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_nan_before_infinity() {
        let x = Array1::from_vec(vec![f64::INFINITY, f64::NAN]);
        assert!(Sphere::evaluate(&x).unwrap().is_nan());
        assert!(Sphere::gradient(&x).unwrap().iter().all(|g| g.is_nan()));
    }

    #[test]
    fn test_record_accessors() {
        let tf = TestFunction::of::<Rosenbrock>();
        assert_eq!(tf.name(), "rosenbrock");
        assert_eq!(tf.default_dimension(), 2);
        assert_eq!(tf.min_position(4).unwrap().to_vec(), vec![1.0; 4]);
        assert!(tf.lower_bound(1).unwrap_err().is_invalid_input());
        assert_eq!(tf.metadata().at_infinity, AtInfinity::PositiveInfinity);

        let bounds = tf.bounds_matrix(3).unwrap();
        assert_eq!(bounds.shape(), &[2, 3]);
        assert!(bounds.row(0).iter().zip(bounds.row(1).iter()).all(|(lo, hi)| lo < hi));
    }

    #[test]
    fn test_ad_gradient_matches_analytic() {
        let tf = TestFunction::of::<Rosenbrock>();
        let x = Array1::from_vec(vec![-1.2, 1.0, 0.3]);
        let analytic = tf.gradient(&x).unwrap();
        let ad = tf.ad_gradient(&x).unwrap();
        for (a, b) in analytic.iter().zip(ad.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_summary_serializes() {
        let tf = TestFunction::of::<Sphere>();
        let summary = tf.summary(3).unwrap();
        assert_eq!(summary.dimension, 3);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"name\":\"sphere\""));
        assert!(json.contains("\"convex\""));
    }
}

//! Verification harness for catalog invariants
//!
//! Checks a [`TestFunction`] against its own metadata:
//! - the value at the documented minimizer matches the documented minimum
//! - the analytic gradient matches forward-mode AD and central differences
//!   at seeded random points inside the box
//! - NaN, infinite, empty and wrong-length inputs behave as documented
//!
//! Tolerances and sampling are set through [`CheckConfig`], which can be
//! loaded from JSON.

use std::fs;
use std::path::Path;

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TestFunctionError};
use crate::metadata::{Arity, Property};
use crate::registry::Catalog;
use crate::TestFunction;

/// Verification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Tolerance on `evaluate(min_position) - min_value`, scaled by `max(1, |min_value|)`
    #[serde(default = "default_minimum_tolerance")]
    pub minimum_tolerance: f64,
    /// Tolerance on the gradient, relative to `max(1, |reference|_inf)`
    #[serde(default = "default_gradient_tolerance")]
    pub gradient_tolerance: f64,
    /// Absolute step of the central differences
    #[serde(default = "default_finite_difference_step")]
    pub finite_difference_step: f64,
    /// Random points per function and dimension
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Seed of the point sampler
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Dimensions checked above the default one for scalable functions
    #[serde(default = "default_extra_dimensions")]
    pub extra_dimensions: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            minimum_tolerance: default_minimum_tolerance(),
            gradient_tolerance: default_gradient_tolerance(),
            finite_difference_step: default_finite_difference_step(),
            samples: default_samples(),
            seed: default_seed(),
            extra_dimensions: default_extra_dimensions(),
        }
    }
}

fn default_minimum_tolerance() -> f64 {
    1e-6
}

fn default_gradient_tolerance() -> f64 {
    1e-4
}

fn default_finite_difference_step() -> f64 {
    1e-6
}

fn default_samples() -> usize {
    16
}

fn default_seed() -> u64 {
    42
}

fn default_extra_dimensions() -> usize {
    3
}

impl CheckConfig {
    /// Parses and validates a JSON configuration. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CheckConfig =
            serde_json::from_str(json).map_err(|e| TestFunctionError::InvalidConfig {
                reason: format!("failed to parse JSON: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| TestFunctionError::InvalidConfig {
            reason: format!("failed to read config file: {}", e),
        })?;
        Self::from_json(&contents)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TestFunctionError::InvalidConfig {
            reason: format!("failed to serialize config: {}", e),
        })
    }

    /// Rejects non-positive tolerances and steps, and an empty sample.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("minimum_tolerance", self.minimum_tolerance),
            ("gradient_tolerance", self.gradient_tolerance),
            ("finite_difference_step", self.finite_difference_step),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TestFunctionError::InvalidConfig {
                    reason: format!("{} must be a positive finite number, got {}", field, value),
                });
            }
        }
        if self.samples == 0 {
            return Err(TestFunctionError::InvalidConfig {
                reason: "samples must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Outcome of [`check_minimum`].
#[derive(Debug, Clone, Serialize)]
pub struct MinimumReport {
    pub name: &'static str,
    pub dimension: usize,
    pub expected: f64,
    pub actual: f64,
    pub passed: bool,
}

/// Outcome of [`check_gradient`].
#[derive(Debug, Clone, Serialize)]
pub struct GradientReport {
    pub name: &'static str,
    pub dimension: usize,
    /// Points where the analytic gradient was compared
    pub points_checked: usize,
    /// Points skipped because the gradient is documented as undefined there
    pub points_skipped: usize,
    /// Largest scaled deviation from the AD gradient
    pub max_ad_error: f64,
    /// Largest scaled deviation from central differences (0 when not compared)
    pub max_fd_error: f64,
    /// Point with the largest deviation
    pub worst_point: Option<Vec<f64>>,
    pub passed: bool,
}

/// Outcome of [`check_special_values`].
#[derive(Debug, Clone, Serialize)]
pub struct SpecialValueReport {
    pub name: &'static str,
    pub dimension: usize,
    pub nan_propagates: bool,
    pub infinity_matches: bool,
    pub empty_rejected: bool,
    pub wrong_length_rejected: bool,
    pub passed: bool,
}

impl SpecialValueReport {
    fn new(name: &'static str, dimension: usize) -> Self {
        Self {
            name,
            dimension,
            nan_propagates: false,
            infinity_matches: false,
            empty_rejected: false,
            wrong_length_rejected: false,
            passed: false,
        }
    }
}

/// All reports of one [`check_all`] run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    pub minimum: Vec<MinimumReport>,
    pub gradient: Vec<GradientReport>,
    pub special_values: Vec<SpecialValueReport>,
}

impl CheckSummary {
    /// Number of failed checks.
    pub fn failures(&self) -> usize {
        self.minimum.iter().filter(|r| !r.passed).count()
            + self.gradient.iter().filter(|r| !r.passed).count()
            + self.special_values.iter().filter(|r| !r.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failures() == 0
    }
}

/// `max_i |actual_i - reference_i| / max(1, max_i |reference_i|)`
fn scaled_error(actual: &Array1<f64>, reference: &Array1<f64>) -> f64 {
    let scale = reference.iter().fold(1.0_f64, |acc, r| acc.max(r.abs()));
    actual
        .iter()
        .zip(reference.iter())
        .fold(0.0_f64, |acc, (a, r)| acc.max((a - r).abs()))
        / scale
}

/// Dimensions exercised for `tf`: the fixed arity, or the minimum, the
/// default and `extra_dimensions` further sizes for scalable functions.
pub fn dimensions_to_check(tf: &TestFunction, config: &CheckConfig) -> Vec<usize> {
    match tf.metadata().arity {
        Arity::Fixed(k) => vec![k],
        Arity::Scalable { min, default } => {
            let mut dims = vec![min, default];
            dims.extend((1..=config.extra_dimensions).map(|k| default + 2 * k));
            dims.sort_unstable();
            dims.dedup();
            dims
        }
    }
}

/// Evaluates at the documented minimizer in dimension `n`.
///
/// Noisy functions pass when the value lies in `[min, min + 1)`.
pub fn check_minimum(tf: &TestFunction, n: usize, config: &CheckConfig) -> Result<MinimumReport> {
    let x = tf.min_position(n)?;
    let expected = tf.min_value(n)?;
    let actual = tf.evaluate(&x)?;
    let tol = config.minimum_tolerance * expected.abs().max(1.0);
    let passed = if tf.has_property(Property::HasNoise) {
        actual >= expected - tol && actual < expected + 1.0 + tol
    } else {
        (actual - expected).abs() <= tol
    };
    Ok(MinimumReport {
        name: tf.name(),
        dimension: x.len(),
        expected,
        actual,
        passed,
    })
}

/// Central-difference gradient with absolute step `h`.
///
/// The quotient divides by the step actually realized in floating point,
/// `(x_i + h) - (x_i - h)`, so large coordinates do not bias it.
pub fn finite_difference(tf: &TestFunction, x: &Array1<f64>, h: f64) -> Result<Array1<f64>> {
    let mut grad = Array1::zeros(x.len());
    let mut probe = x.clone();
    for i in 0..x.len() {
        let (upper, lower) = (x[i] + h, x[i] - h);
        probe[i] = upper;
        let forward = tf.evaluate(&probe)?;
        probe[i] = lower;
        let backward = tf.evaluate(&probe)?;
        probe[i] = x[i];
        grad[i] = (forward - backward) / (upper - lower);
    }
    Ok(grad)
}

/// Scaled deviations `(ad, fd)` of the analytic gradient at `x`.
///
/// Returns `None` where the analytic gradient or its AD reference is not
/// finite, i.e. at documented non-differentiable points. Central
/// differences are only compared for functions tagged `differentiable`;
/// the error is zero otherwise.
pub fn check_gradient_at(
    tf: &TestFunction,
    x: &Array1<f64>,
    config: &CheckConfig,
) -> Result<Option<(f64, f64)>> {
    let analytic = tf.gradient(x)?;
    let ad = tf.ad_gradient(x)?;
    if analytic.iter().chain(ad.iter()).any(|g| !g.is_finite()) {
        return Ok(None);
    }
    let ad_error = scaled_error(&analytic, &ad);

    let fd_error = if tf.has_property(Property::Differentiable)
        && !tf.has_property(Property::HasNoise)
    {
        let fd = finite_difference(tf, x, config.finite_difference_step)?;
        scaled_error(&analytic, &fd)
    } else {
        0.0
    };
    Ok(Some((ad_error, fd_error)))
}

/// Draws a point uniformly from the box of `tf` in dimension `n`.
pub fn sample_point<R: Rng + ?Sized>(tf: &TestFunction, n: usize, rng: &mut R) -> Result<Array1<f64>> {
    let lower = tf.lower_bound(n)?;
    let upper = tf.upper_bound(n)?;
    Ok(Array1::from_shape_fn(lower.len(), |i| {
        lower[i] + rng.random::<f64>() * (upper[i] - lower[i])
    }))
}

/// Compares gradients at `config.samples` seeded points inside the box.
pub fn check_gradient(tf: &TestFunction, n: usize, config: &CheckConfig) -> Result<GradientReport> {
    let mut rng = StdRng::seed_from_u64(config.seed ^ n as u64);
    let mut report = GradientReport {
        name: tf.name(),
        dimension: tf.lower_bound(n)?.len(),
        points_checked: 0,
        points_skipped: 0,
        max_ad_error: 0.0,
        max_fd_error: 0.0,
        worst_point: None,
        passed: true,
    };
    let mut worst = 0.0_f64;

    for _ in 0..config.samples {
        let x = sample_point(tf, n, &mut rng)?;
        match check_gradient_at(tf, &x, config)? {
            None => report.points_skipped += 1,
            Some((ad_error, fd_error)) => {
                report.points_checked += 1;
                report.max_ad_error = report.max_ad_error.max(ad_error);
                report.max_fd_error = report.max_fd_error.max(fd_error);
                if ad_error.max(fd_error) > worst {
                    worst = ad_error.max(fd_error);
                    report.worst_point = Some(x.to_vec());
                }
            }
        }
    }
    report.passed = worst <= config.gradient_tolerance;
    Ok(report)
}

fn same_value(actual: f64, expected: f64) -> bool {
    actual == expected || (actual.is_nan() && expected.is_nan())
}

/// Checks the special-value and validation contract in dimension `n`.
pub fn check_special_values(tf: &TestFunction, n: usize) -> Result<SpecialValueReport> {
    let start = tf.start(n)?;
    let dim = start.len();
    let mut report = SpecialValueReport::new(tf.name(), dim);

    let mut with_nan = start.clone();
    with_nan[0] = f64::NAN;
    let nan_grad = tf.gradient(&with_nan)?;
    report.nan_propagates = tf.evaluate(&with_nan)?.is_nan()
        && nan_grad.len() == dim
        && nan_grad.iter().all(|g| g.is_nan());

    let at_infinity = tf.metadata().at_infinity;
    let expected_grad = at_infinity.gradient_component();
    let mut infinity_matches = true;
    for sentinel in [f64::INFINITY, f64::NEG_INFINITY] {
        let mut with_inf = start.clone();
        with_inf[dim - 1] = sentinel;
        let value = tf.evaluate(&with_inf)?;
        let grad = tf.gradient(&with_inf)?;
        infinity_matches &= same_value(value, at_infinity.value())
            && grad.len() == dim
            && grad.iter().all(|&g| same_value(g, expected_grad));
    }
    report.infinity_matches = infinity_matches;

    let empty = Array1::<f64>::zeros(0);
    report.empty_rejected = matches!(tf.evaluate(&empty), Err(ref e) if e.is_invalid_input())
        && matches!(tf.gradient(&empty), Err(ref e) if e.is_invalid_input());

    let wrong = match tf.metadata().arity {
        Arity::Fixed(k) => Some(Array1::<f64>::zeros(k + 1)),
        Arity::Scalable { min, .. } if min > 1 => Some(Array1::<f64>::zeros(min - 1)),
        Arity::Scalable { .. } => None,
    };
    report.wrong_length_rejected = match wrong {
        Some(x) => {
            matches!(tf.evaluate(&x), Err(ref e) if e.is_dimension_error())
                && matches!(tf.gradient(&x), Err(ref e) if e.is_dimension_error())
        }
        None => true,
    };

    report.passed = report.nan_propagates
        && report.infinity_matches
        && report.empty_rejected
        && report.wrong_length_rejected;
    Ok(report)
}

/// Runs every check over every function of `catalog`.
pub fn check_all(catalog: &Catalog, config: &CheckConfig) -> Result<CheckSummary> {
    config.validate()?;
    let mut summary = CheckSummary::default();
    for tf in catalog.iter() {
        for n in dimensions_to_check(&tf, config) {
            let minimum = check_minimum(&tf, n, config)?;
            if !minimum.passed {
                log::warn!(
                    "{} (n = {}): minimum {} expected, got {}",
                    minimum.name,
                    minimum.dimension,
                    minimum.expected,
                    minimum.actual
                );
            }
            summary.minimum.push(minimum);

            let gradient = check_gradient(&tf, n, config)?;
            if !gradient.passed {
                log::warn!(
                    "{} (n = {}): gradient mismatch, ad error {:.3e}, fd error {:.3e} at {:?}",
                    gradient.name,
                    gradient.dimension,
                    gradient.max_ad_error,
                    gradient.max_fd_error,
                    gradient.worst_point
                );
            }
            summary.gradient.push(gradient);

            let special = check_special_values(&tf, n)?;
            if !special.passed {
                log::warn!(
                    "{} (n = {}): special value contract violated: {:?}",
                    special.name,
                    n,
                    special
                );
            }
            summary.special_values.push(special);
        }
    }
    log::info!(
        "checked {} functions, {} failures",
        catalog.len(),
        summary.failures()
    );
    Ok(summary)
}

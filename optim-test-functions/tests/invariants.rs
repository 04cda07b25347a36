use approx::assert_relative_eq;
use ndarray::Array1;
use optim_test_functions::check::{
    check_all, check_gradient, check_minimum, check_special_values, CheckConfig,
};
use optim_test_functions::{
    catalog, Benchmark, Dual, Property, Rosenbrock, Sphere, TestFunctionError,
};

fn arr(values: &[f64]) -> Array1<f64> {
    Array1::from_vec(values.to_vec())
}

#[test]
fn test_whole_catalog_passes_the_harness() {
    let summary = check_all(catalog(), &CheckConfig::default()).unwrap();
    let failed_minimum: Vec<_> = summary.minimum.iter().filter(|r| !r.passed).collect();
    let failed_gradient: Vec<_> = summary.gradient.iter().filter(|r| !r.passed).collect();
    let failed_special: Vec<_> = summary.special_values.iter().filter(|r| !r.passed).collect();
    assert!(failed_minimum.is_empty(), "{:#?}", failed_minimum);
    assert!(failed_gradient.is_empty(), "{:#?}", failed_gradient);
    assert!(failed_special.is_empty(), "{:#?}", failed_special);
    assert!(summary.all_passed());
}

#[test]
fn test_gradient_is_compared_somewhere_for_every_function() {
    let config = CheckConfig::default();
    for tf in catalog().iter() {
        let report = check_gradient(&tf, tf.default_dimension(), &config).unwrap();
        assert!(report.points_checked > 0, "{}: every sample skipped", tf.name());
    }
}

#[test]
fn test_sphere() {
    let tf = catalog().require("sphere").unwrap();
    assert_eq!(tf.evaluate(&arr(&[0.0, 0.0])), Ok(0.0));
    assert_eq!(tf.gradient(&arr(&[3.0, 4.0])).unwrap(), arr(&[6.0, 8.0]));
}

#[test]
fn test_rosenbrock_at_minimum() {
    let tf = catalog().require("rosenbrock").unwrap();
    let x = arr(&[1.0, 1.0]);
    assert_eq!(tf.evaluate(&x), Ok(0.0));
    assert_eq!(tf.gradient(&x).unwrap(), arr(&[0.0, 0.0]));
}

#[test]
fn test_easom_at_minimum() {
    let tf = catalog().require("easom").unwrap();
    let pi = std::f64::consts::PI;
    assert_relative_eq!(tf.evaluate(&arr(&[pi, pi])).unwrap(), -1.0, epsilon = 1e-12);
    // limit towards infinity
    assert_eq!(tf.evaluate(&arr(&[f64::INFINITY, 0.0])), Ok(0.0));
    assert_eq!(tf.gradient(&arr(&[f64::INFINITY, 0.0])).unwrap(), arr(&[0.0, 0.0]));
}

#[test]
fn test_bukin4_kink() {
    let tf = catalog().require("bukin4").unwrap();
    let x = arr(&[-10.0, 0.0]);
    assert_eq!(tf.evaluate(&x), Ok(0.0));
    let grad = tf.gradient(&x).unwrap();
    assert!(grad[0].is_nan());
}

#[test]
fn test_schwefel_near_zero_at_minimizer() {
    let tf = catalog().require("schwefel").unwrap();
    let value = tf.evaluate(&arr(&[420.9687])).unwrap();
    assert!(value.abs() < 1e-3, "{}", value);
}

#[test]
fn test_minimum_reports_carry_expected_values() {
    let config = CheckConfig::default();
    let tf = catalog().require("trid").unwrap();
    let report = check_minimum(&tf, 6, &config).unwrap();
    assert!(report.passed);
    assert_eq!(report.expected, -50.0);
    assert_eq!(report.dimension, 6);
}

#[test]
fn test_empty_and_wrong_length_inputs() {
    for tf in catalog().iter() {
        let empty = Array1::<f64>::zeros(0);
        let err = tf.evaluate(&empty).unwrap_err();
        assert!(matches!(err, TestFunctionError::EmptyInput { .. }), "{}", tf.name());
        assert!(tf.gradient(&empty).unwrap_err().is_invalid_input());
        assert!(tf.ad_gradient(&empty).unwrap_err().is_invalid_input());
    }

    let beale = catalog().require("beale").unwrap();
    assert_eq!(
        beale.evaluate(&arr(&[1.0, 2.0, 3.0])),
        Err(TestFunctionError::DimensionMismatch {
            function: "beale",
            expected: 2,
            got: 3
        })
    );
    let rosenbrock = catalog().require("rosenbrock").unwrap();
    assert!(rosenbrock.gradient(&arr(&[1.0])).unwrap_err().is_dimension_error());
}

#[test]
fn test_dimension_accessors_reject_small_n() {
    for name in ["rosenbrock", "trid"] {
        let tf = catalog().require(name).unwrap();
        assert!(tf.lower_bound(1).unwrap_err().is_invalid_input());
        assert!(tf.upper_bound(1).unwrap_err().is_invalid_input());
        assert!(tf.start(1).unwrap_err().is_invalid_input());
        assert!(tf.min_position(1).unwrap_err().is_invalid_input());
        assert!(tf.min_value(1).unwrap_err().is_invalid_input());
        assert!(tf.bounds_matrix(1).is_err());
    }
    // fixed arity ignores n
    let colville = catalog().require("colville").unwrap();
    assert_eq!(colville.start(1).unwrap().len(), 4);
}

#[test]
fn test_nan_and_infinity_everywhere() {
    for tf in catalog().iter() {
        let report = check_special_values(&tf, tf.default_dimension()).unwrap();
        assert!(report.nan_propagates, "{}", tf.name());
        assert!(report.infinity_matches, "{}", tf.name());
    }
    let cross = catalog().require("cross_in_tray").unwrap();
    assert_eq!(cross.evaluate(&arr(&[f64::NEG_INFINITY, 1.0])), Ok(f64::NEG_INFINITY));
    let sphere = catalog().require("sphere").unwrap();
    assert_eq!(sphere.evaluate(&arr(&[1.0, f64::INFINITY])), Ok(f64::INFINITY));
}

#[test]
fn test_generic_scalar_types() {
    let x32 = Array1::from_vec(vec![1.0_f32, 1.0, 1.0]);
    assert_eq!(Rosenbrock::evaluate(&x32), Ok(0.0_f32));

    let xd = Array1::from_vec(vec![Dual::new(3.0_f64, 1.0), Dual::constant(4.0)]);
    let value = Sphere::evaluate(&xd).unwrap();
    assert_eq!(value.val, 25.0);
    assert_eq!(value.eps, 6.0);
}

#[test]
fn test_ad_gradient_matches_closed_form_at_start() {
    for tf in catalog().with_property(Property::Differentiable) {
        let x = tf.start(tf.default_dimension()).unwrap();
        let analytic = tf.gradient(&x).unwrap();
        let ad = tf.ad_gradient(&x).unwrap();
        if analytic.iter().chain(ad.iter()).any(|g| !g.is_finite()) {
            continue;
        }
        let scale = ad.iter().fold(1.0_f64, |acc, g| acc.max(g.abs()));
        for (a, r) in analytic.iter().zip(ad.iter()) {
            assert!((a - r).abs() <= 1e-8 * scale, "{}: {} vs {}", tf.name(), a, r);
        }
    }
}

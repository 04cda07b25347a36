use optim_test_functions::check::{dimensions_to_check, CheckConfig};
use optim_test_functions::{catalog, Arity, AtInfinity, Property};
use std::collections::HashSet;

const WITH_LITERATURE_NOTE: [&str; 5] = [
    "branin_rcos2",
    "carrom_table",
    "deckkers_aarts",
    "rosenbrock_modified",
    "shubert3",
];

#[test]
fn test_names_are_unique_lowercase_identifiers() {
    let mut seen = HashSet::new();
    for tf in catalog().iter() {
        let name = tf.name();
        assert!(seen.insert(name), "duplicate name {}", name);
        assert!(!name.is_empty());
        assert!(
            name.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "bad name {}",
            name
        );
        assert_eq!(catalog().get(name).map(|t| t.name()), Some(name));
    }
    assert_eq!(seen.len(), catalog().len());
}

#[test]
fn test_scalable_tag_matches_arity() {
    for tf in catalog().iter() {
        assert_eq!(
            tf.has_property(Property::Scalable),
            tf.metadata().arity.is_scalable(),
            "{}",
            tf.name()
        );
    }
}

#[test]
fn test_finite_at_inf_tag_matches_limit() {
    for tf in catalog().iter() {
        let is_limit = matches!(tf.metadata().at_infinity, AtInfinity::Limit(_));
        assert_eq!(tf.has_property(Property::FiniteAtInf), is_limit, "{}", tf.name());
    }
}

#[test]
fn test_points_have_the_right_length_and_lie_in_the_box() {
    let config = CheckConfig::default();
    for tf in catalog().iter() {
        for n in dimensions_to_check(&tf, &config) {
            let lower = tf.lower_bound(n).unwrap();
            let upper = tf.upper_bound(n).unwrap();
            let start = tf.start(n).unwrap();
            let min = tf.min_position(n).unwrap();
            let dim = match tf.metadata().arity {
                Arity::Fixed(k) => k,
                Arity::Scalable { .. } => n,
            };
            for v in [&lower, &upper, &start, &min] {
                assert_eq!(v.len(), dim, "{} (n = {})", tf.name(), n);
            }
            for i in 0..dim {
                assert!(lower[i] < upper[i], "{}: empty box in {}", tf.name(), i);
                assert!(
                    lower[i] <= min[i] && min[i] <= upper[i],
                    "{}: minimizer outside the box",
                    tf.name()
                );
                assert!(
                    lower[i] <= start[i] && start[i] <= upper[i],
                    "{}: start outside the box",
                    tf.name()
                );
            }
            assert_ne!(start, min, "{}: start is the minimizer", tf.name());
            assert!(tf.min_value(n).unwrap().is_finite());
        }
    }
}

#[test]
fn test_literature_notes() {
    for tf in catalog().iter() {
        let note = tf.metadata().literature;
        assert_eq!(
            note.is_some(),
            WITH_LITERATURE_NOTE.contains(&tf.name()),
            "{}",
            tf.name()
        );
        if let Some(note) = note {
            assert!(!note.remark.is_empty());
            let verified = tf.min_value(tf.default_dimension()).unwrap();
            assert!(
                note.reported_value != verified,
                "{}: note repeats the verified value",
                tf.name()
            );
        }
    }
}

#[test]
fn test_properties_are_known_tags_without_repeats() {
    for tf in catalog().iter() {
        let tags: HashSet<Property> = tf.properties().iter().copied().collect();
        assert_eq!(tags.len(), tf.properties().len(), "{}", tf.name());
        for tag in tf.properties() {
            assert_eq!(tag.as_str().parse::<Property>(), Ok(*tag));
        }
    }
    assert_eq!(
        catalog()
            .with_property(Property::HasNoise)
            .iter()
            .map(|tf| tf.name())
            .collect::<Vec<_>>(),
        vec!["quartic"]
    );
}

#[test]
fn test_metadata_text_is_filled_in() {
    for tf in catalog().iter() {
        let meta = tf.metadata();
        assert!(!meta.description.is_empty(), "{}", tf.name());
        assert!(!meta.math.is_empty(), "{}", tf.name());
        assert!(!meta.source.is_empty(), "{}", tf.name());
    }
}

#[test]
fn test_summary_to_json() {
    let tf = catalog().require("hartmann_3d").unwrap();
    let summary = tf.summary(10).unwrap();
    assert_eq!(summary.dimension, 3);
    let value: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["name"], "hartmann_3d");
    assert_eq!(value["min_position"].as_array().map(|a| a.len()), Some(3));
    assert!(value["properties"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p == "finite_at_inf"));
}

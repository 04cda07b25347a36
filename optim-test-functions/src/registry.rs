//! Process-wide catalog of test functions
//!
//! The catalog is an immutable table built once from [`functions::all`] the
//! first time [`catalog`] is called. Modules do not register themselves.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{Result, TestFunctionError};
use crate::functions;
use crate::metadata::Property;
use crate::TestFunction;

/// Named, read-only collection of test functions.
#[derive(Debug)]
pub struct Catalog {
    entries: BTreeMap<&'static str, TestFunction>,
}

impl Catalog {
    /// Builds a catalog from explicit records.
    ///
    /// Later records with an already used name are dropped with a warning;
    /// the tests guarantee the built-in list has no such collision.
    pub fn from_functions(list: impl IntoIterator<Item = TestFunction>) -> Self {
        let mut entries = BTreeMap::new();
        for tf in list {
            if entries.contains_key(tf.name()) {
                log::warn!("duplicate test function name ignored: {}", tf.name());
                continue;
            }
            entries.insert(tf.name(), tf);
        }
        Self { entries }
    }

    /// Looks a function up by name.
    pub fn get(&self, name: &str) -> Option<TestFunction> {
        self.entries.get(name).copied()
    }

    /// Looks a function up by name, failing with
    /// [`TestFunctionError::UnknownFunction`].
    pub fn require(&self, name: &str) -> Result<TestFunction> {
        self.get(name).ok_or_else(|| TestFunctionError::UnknownFunction {
            name: name.to_string(),
        })
    }

    /// Whether a function with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All records in name order.
    pub fn iter(&self) -> impl Iterator<Item = TestFunction> + '_ {
        self.entries.values().copied()
    }

    /// All names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Functions tagged with `property`.
    pub fn with_property(&self, property: Property) -> Vec<TestFunction> {
        self.iter().filter(|tf| tf.has_property(property)).collect()
    }

    /// Functions accepting any dimension from their minimum upwards.
    pub fn scalable(&self) -> Vec<TestFunction> {
        self.iter()
            .filter(|tf| tf.metadata().arity.is_scalable())
            .collect()
    }

    /// Fixed-arity functions of exactly `k` dimensions.
    pub fn fixed_dimension(&self, k: usize) -> Vec<TestFunction> {
        self.iter()
            .filter(|tf| {
                let arity = tf.metadata().arity;
                !arity.is_scalable() && arity.default_dimension() == k
            })
            .collect()
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The built-in catalog.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let catalog = Catalog::from_functions(functions::all());
        log::debug!("test function catalog built with {} entries", catalog.len());
        catalog
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{Beale, Sphere};

    #[test]
    fn test_lookup() {
        let cat = catalog();
        assert!(cat.len() >= 50);
        assert_eq!(cat.get("sphere").map(|tf| tf.name()), Some("sphere"));
        assert!(cat.get("Sphere").is_none());
        assert!(cat.require("no_such_function").unwrap_err().is_lookup_error());
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let names = catalog().names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let cat = Catalog::from_functions([
            TestFunction::of::<Sphere>(),
            TestFunction::of::<Beale>(),
            TestFunction::of::<Sphere>(),
        ]);
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.names(), vec!["beale", "sphere"]);
    }

    #[test]
    fn test_filters() {
        let cat = catalog();
        assert!(cat.scalable().iter().any(|tf| tf.name() == "rastrigin"));
        assert!(cat.fixed_dimension(4).iter().any(|tf| tf.name() == "colville"));
        assert!(cat
            .with_property(Property::HasNoise)
            .iter()
            .all(|tf| tf.name() == "quartic"));
    }
}

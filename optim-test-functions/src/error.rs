//! Error types for test function evaluation and catalog lookup.
//!
//! Input validation failures are the only errors a test function can raise;
//! non-differentiable points and NaN/Inf inputs are reported through return
//! values instead.

use thiserror::Error;

/// Errors raised by test functions, the catalog and the verification harness.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestFunctionError {
    /// The input vector has no components.
    #[error("{function}: input vector must not be empty")]
    EmptyInput {
        /// Name of the function that rejected the input
        function: &'static str,
    },

    /// A fixed-arity function received the wrong number of components.
    #[error("{function}: expected {expected} dimensions, got {got}")]
    DimensionMismatch {
        /// Name of the function that rejected the input
        function: &'static str,
        /// Required dimension
        expected: usize,
        /// Dimension provided
        got: usize,
    },

    /// A scalable function received fewer components than it supports.
    #[error("{function}: requires at least {min} dimensions, got {got}")]
    DimensionTooSmall {
        /// Name of the function that rejected the input
        function: &'static str,
        /// Smallest supported dimension
        min: usize,
        /// Dimension provided
        got: usize,
    },

    /// No function with this name is registered.
    #[error("unknown test function: {name}")]
    UnknownFunction {
        /// The name that was looked up
        name: String,
    },

    /// A property tag outside the controlled vocabulary.
    #[error("unknown property tag: {name}")]
    UnknownProperty {
        /// The tag that was parsed
        name: String,
    },

    /// A verification configuration value is out of range.
    #[error("invalid check configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },
}

/// A specialized `Result` type for test function operations.
pub type Result<T> = std::result::Result<T, TestFunctionError>;

impl TestFunctionError {
    /// Returns `true` if this is an input-validation error.
    ///
    /// This covers `EmptyInput`, `DimensionMismatch` and `DimensionTooSmall`,
    /// i.e. every error `evaluate`, `gradient` and the dimension-parameterized
    /// metadata accessors can raise.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TestFunctionError::EmptyInput { .. }
                | TestFunctionError::DimensionMismatch { .. }
                | TestFunctionError::DimensionTooSmall { .. }
        )
    }

    /// Returns `true` if the input had a dimension the function does not accept.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            TestFunctionError::DimensionMismatch { .. } | TestFunctionError::DimensionTooSmall { .. }
        )
    }

    /// Returns `true` if a name lookup (function or property tag) failed.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            TestFunctionError::UnknownFunction { .. } | TestFunctionError::UnknownProperty { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TestFunctionError::DimensionMismatch {
            function: "easom",
            expected: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "easom: expected 2 dimensions, got 3");

        let err = TestFunctionError::EmptyInput { function: "sphere" };
        assert_eq!(err.to_string(), "sphere: input vector must not be empty");
    }

    #[test]
    fn test_is_invalid_input() {
        let empty = TestFunctionError::EmptyInput { function: "sphere" };
        let small = TestFunctionError::DimensionTooSmall {
            function: "rosenbrock",
            min: 2,
            got: 1,
        };
        let lookup = TestFunctionError::UnknownFunction {
            name: "nope".to_string(),
        };

        assert!(empty.is_invalid_input());
        assert!(small.is_invalid_input());
        assert!(!lookup.is_invalid_input());
    }

    #[test]
    fn test_is_dimension_error() {
        let empty = TestFunctionError::EmptyInput { function: "sphere" };
        let mismatch = TestFunctionError::DimensionMismatch {
            function: "beale",
            expected: 2,
            got: 4,
        };

        assert!(mismatch.is_dimension_error());
        assert!(!empty.is_dimension_error());
    }

    #[test]
    fn test_is_lookup_error() {
        let lookup = TestFunctionError::UnknownFunction {
            name: "nope".to_string(),
        };
        let config = TestFunctionError::InvalidConfig {
            reason: "samples must be > 0".to_string(),
        };

        let tag = TestFunctionError::UnknownProperty {
            name: "smooth".to_string(),
        };

        assert!(lookup.is_lookup_error());
        assert!(tag.is_lookup_error());
        assert!(!tag.is_invalid_input());
        assert!(!config.is_lookup_error());
    }
}

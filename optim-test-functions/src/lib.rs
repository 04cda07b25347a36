#![doc = include_str!("../README.md")]
#![doc = include_str!("../REFERENCES.md")]

pub mod check;
pub mod dual;
pub mod error;
pub mod functions;
pub mod metadata;
pub mod registry;
pub mod scalar;
pub mod test_function;

pub use dual::Dual;
pub use error::{Result, TestFunctionError};
pub use functions::*;
pub use metadata::{Arity, AtInfinity, FunctionMetadata, LiteratureNote, MinValue, Point, Property};
pub use registry::{catalog, Catalog};
pub use scalar::Scalar;
pub use test_function::{Benchmark, FunctionSummary, TestFunction};

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_lookup_and_evaluate_by_name() {
        let tf = catalog().require("rastrigin").unwrap();
        let x = Array1::from_vec(vec![0.0; 5]);
        assert_eq!(tf.evaluate(&x), Ok(0.0));
    }

    #[test]
    fn test_every_module_is_registered() {
        assert_eq!(functions::all().len(), catalog().len());
    }
}

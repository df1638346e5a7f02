//! Errors
//!
//! Custom error types used throughout the `minicart` crate.
use thiserror::Error;

/// Schema violations detected when fitting a decision tree.
/// Either variant aborts the whole fit call that triggered it.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A feature column holds non-numeric values.
    #[error("The feature column {0:?} holds non-numeric values. Every feature column must be numeric.")]
    NonNumericFeature(String),
    /// The target column does not take exactly two distinct categories.
    #[error("The target column takes {0} distinct categories. Expected exactly 2 for binary classification.")]
    CategoryCount(usize),
}

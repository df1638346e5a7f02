//! Exports the commonly used types and traits of this crate.
//!
pub use crate::sample::{
    Sample,
    SampleReader,
    Feature,
    Label,
};


pub use crate::tree::{
    DecisionTree,
    DecisionTreeClassifier,
    GrowthEvent,
};


pub use crate::hypothesis::Classifier;
pub use crate::research::CrossValidation;
pub use crate::errors::SchemaError;

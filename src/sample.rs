//! Defines the in-memory tabular dataset and its columns.
mod feature_struct;
mod label;
mod sample_struct;
mod sample_reader;

pub use feature_struct::{Feature, NumericFeature, CategoricalFeature};
pub use label::Label;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;

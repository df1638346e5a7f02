#![warn(missing_docs)]

//!
//! A crate that provides a minimal CART decision tree
//! for binary classification.
//!
//! The tree is grown by exhaustive threshold search:
//! every distinct value observed in a feature column is a candidate
//! threshold, and the candidate that maximizes the information gain
//! (measured by a Gini-style impurity) becomes the splitting rule.
//! A node stops splitting when the maximal depth is reached,
//! when every feature is constant over its rows,
//! or when no split improves purity.
//!
//! Each leaf stores a class-probability pair,
//! ordered by the sorted pair of target categories,
//! so predictions are probability distributions rather than hard labels.
//!
//! # Example
//!
//! ```no_run
//! use minicart::prelude::*;
//!
//! // Read the training data from a CSV file.
//! let file = "/path/to/data/file.csv";
//! let sample = SampleReader::new()
//!     .file(file)
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! // Grow a tree of depth at most 3,
//! // printing a progress line per node.
//! let tree = DecisionTree::new()
//!     .max_depth(3)
//!     .verbose();
//! let f = tree.fit(&sample).unwrap();
//!
//! // One probability pair per row, in row order.
//! let probabilities = f.predict_all(&sample);
//! println!("classes: {:?}", f.classes());
//! println!("{probabilities:?}");
//! ```

pub mod sample;
pub mod tree;
pub mod hypothesis;
pub mod research;
pub mod errors;
pub mod prelude;

mod common;


pub use sample::{Sample, SampleReader, Feature, Label};

pub use tree::{
    DecisionTree,
    DecisionTreeClassifier,
    GrowthEvent,
};

pub use hypothesis::Classifier;
pub use research::CrossValidation;
pub use errors::SchemaError;

//! This file defines the split rule for the decision tree.
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::common::type_and_struct::Threshold;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LR {
    Left,
    Right,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Splitter {
    pub(crate) feature: String,
    pub(crate) threshold: Threshold,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(name: &str, threshold: Threshold) -> Self {
        let feature = name.to_string();
        Self {
            feature,
            threshold,
        }
    }


    /// Defines the splitting.
    /// A row goes to the left child when its feature value
    /// does not exceed the threshold.
    #[inline]
    pub(crate) fn split(&self, sample: &Sample, row: usize) -> LR {
        let name = &self.feature;

        let value = sample[name][row];

        if value <= self.threshold.0 {
            LR::Left
        } else {
            LR::Right
        }
    }
}

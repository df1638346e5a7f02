//! Defines the decision tree learner.
use colored::Colorize;

use crate::Sample;
use crate::sample::Label;
use crate::errors::SchemaError;
use crate::common::checker;
use crate::common::type_and_struct::Depth;

use super::{
    measure,
    node::Node,
    split_rule::{Splitter, LR},
    dtree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The default maximal depth of the tree.
const DEFAULT_MAX_DEPTH: usize = 6;


/// A notice emitted once per node while growing a tree.
/// These events are purely informational;
/// they do not affect the resulting classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthEvent {
    /// A node at the given depth started processing its rows.
    Processing {
        /// The level of the node. The root lives at depth `1`.
        depth: usize,
        /// The number of rows routed to the node.
        n_sample: usize,
    },
    /// A node became a leaf because the maximal depth is reached.
    MaxDepthReached {
        /// The level of the node.
        depth: usize,
    },
}


/// The decision tree learner.
/// Given a training sample with a designated binary target column,
/// [`DecisionTree::fit`] grows a tree depth-first and
/// returns a [`DecisionTreeClassifier`].
///
/// # Example
/// ```no_run
/// use minicart::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTree::new().max_depth(2);
/// let f = tree.fit(&sample).unwrap();
///
/// let probabilities = f.predict_all(&sample);
/// println!("{probabilities:?}");
/// ```
pub struct DecisionTree {
    max_depth: Depth,
    observer: Option<Box<dyn Fn(GrowthEvent)>>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// The default maximal depth is `6`.
    #[inline]
    pub fn new() -> Self {
        Self {
            max_depth: Depth::from(DEFAULT_MAX_DEPTH),
            observer: None,
        }
    }


    /// Specify the maximal depth of the tree.
    /// `depth` must be a positive integer.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0);
        self.max_depth = Depth::from(depth);

        self
    }


    /// Install an observer that receives one [`GrowthEvent`]
    /// per node visited during [`DecisionTree::fit`].
    pub fn observer<F>(mut self, observer: F) -> Self
        where F: Fn(GrowthEvent) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }


    /// Install the default observer that prints
    /// one progress line per node to stdout.
    pub fn verbose(self) -> Self {
        self.observer(print_progress)
    }


    /// Fit the tree to `sample`.
    /// The sample must have numeric feature columns and
    /// a binary target column;
    /// otherwise this method returns a [`SchemaError`].
    ///
    /// The category pair is derived once, here, from the full sample
    /// and sorted in ascending order;
    /// every leaf orders its probability pair the same way,
    /// so a partition holding a single category is a normal pure leaf.
    pub fn fit(&self, sample: &Sample)
        -> Result<DecisionTreeClassifier, SchemaError>
    {
        sample.target_is_specified();
        checker::check_numeric_features(sample)?;
        let classes = checker::check_binary_target(sample)?;

        let n_sample = sample.shape().0;
        let indices = (0..n_sample).collect::<Vec<usize>>();

        let root = self.grow(sample, &classes, indices, Depth::from(1));

        Ok(DecisionTreeClassifier::from_raw(*root, classes))
    }


    /// Grow the sub-tree over the rows `indices`, depth-first.
    /// Both children are fully built before this call returns.
    fn grow(
        &self,
        sample: &Sample,
        classes: &[Label; 2],
        indices: Vec<usize>,
        depth: Depth,
    ) -> Box<Node>
    {
        let target = sample.target();
        let probability = measure::class_probability(
            target, &indices[..], classes,
        );

        // Reaching the maximal depth is a normal stop condition,
        // not an error.
        if depth > self.max_depth {
            self.notify(GrowthEvent::MaxDepthReached {
                depth: depth.into(),
            });
            return Box::new(Node::leaf(probability));
        }
        self.notify(GrowthEvent::Processing {
            depth: depth.into(),
            n_sample: indices.len(),
        });

        let impurity = measure::impurity(target, &indices[..], classes);

        // Find the best pair of feature name and threshold.
        // If every feature is constant over the rows,
        // or the best split does not improve purity,
        // construct a leaf node.
        let found = measure::best_split(
            sample, &indices[..], classes, impurity,
        );
        let Some((feature, threshold, gain)) = found else {
            return Box::new(Node::leaf(probability));
        };
        if gain <= 0.0 {
            return Box::new(Node::leaf(probability));
        }

        // Construct the splitting rule
        // from the best feature and threshold.
        let rule = Splitter::new(feature, threshold);

        // Split the rows for the left/right children.
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices {
            match rule.split(sample, i) {
                LR::Left => { lindices.push(i); },
                LR::Right => { rindices.push(i); },
            }
        }

        // A positive gain implies both sides are non-empty.
        if lindices.is_empty() || rindices.is_empty() {
            return Box::new(Node::leaf(probability));
        }

        let left = self.grow(sample, classes, lindices, depth + 1);
        let right = self.grow(sample, classes, rindices, depth + 1);

        Box::new(Node::branch(rule, left, right))
    }


    fn notify(&self, event: GrowthEvent) {
        if let Some(observer) = &self.observer {
            observer(event);
        }
    }
}


impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {}\n\
            ----------\
            ",
            self.max_depth,
        )
    }
}


/// The default progress printer installed by
/// [`DecisionTree::verbose`].
fn print_progress(event: GrowthEvent) {
    match event {
        GrowthEvent::Processing { depth, n_sample } => {
            println!(
                "{}    {}",
                format!("[depth {depth: >3}]").bold().green(),
                format!("processing {n_sample} rows"),
            );
        },
        GrowthEvent::MaxDepthReached { depth } => {
            println!(
                "{}    {}",
                format!("[depth {depth: >3}]").bold().yellow(),
                "stop splitting: max depth reached",
            );
        },
    }
}

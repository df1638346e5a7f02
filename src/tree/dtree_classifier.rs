//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};
use crate::sample::Label;
use super::node::Node;

use std::fs;
use std::io;
use std::path::Path;


/// The trained decision tree classifier
/// produced by [`DecisionTree::fit`](crate::DecisionTree::fit).
/// It owns the root node of the tree and
/// the sorted pair of target categories
/// that orders every probability pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    classes: [Label; 2],
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_raw(root: Node, classes: [Label; 2]) -> Self {
        Self { root, classes }
    }


    /// The sorted pair of target categories.
    /// `probability(..)[k]` is the probability of `classes()[k]`.
    pub fn classes(&self) -> &[Label; 2] {
        &self.classes
    }


    /// Returns the number of leaves of this tree.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the number of levels of this tree.
    /// A single-leaf tree has depth `1`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Write the trained classifier to a JSON file.
    #[inline]
    pub fn save_json<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let js = serde_json::to_string(self)
            .map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })?;
        fs::write(path, js)
    }


    /// Read a trained classifier from a JSON file
    /// written by [`DecisionTreeClassifier::save_json`].
    #[inline]
    pub fn load_json<P>(path: P) -> io::Result<Self>
        where P: AsRef<Path>
    {
        let js = fs::read_to_string(path)?;
        serde_json::from_str(&js)
            .map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, e.to_string())
            })
    }


    /// Write the current decision tree to a dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut graph = String::from("graph DecisionTree {");

        let info = self.root.to_dot_info(0).0;
        info.into_iter()
            .for_each(|row| {
                graph.push_str(&row);
            });

        graph.push('}');

        fs::write(path, graph)
    }
}


impl Classifier for DecisionTreeClassifier {
    fn probability(&self, sample: &Sample, row: usize) -> [f64; 2] {
        self.root.probability(sample, row)
    }
}

//! Defines the inner representation
//! of the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};
use super::split_rule::*;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has two children.
    Branch(BranchNode),


    /// A node that has no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the decision tree.
/// Each `BranchNode` owns exactly two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of the decision tree.
/// A leaf stores the class-probability pair of the rows
/// routed to it during training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) probability: [f64; 2],
}


impl Node {
    /// Construct a branch node from the given components.
    #[inline]
    pub(super) fn branch(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Self
    {
        Self::Branch(BranchNode { rule, left, right, })
    }


    /// Construct a leaf node that stores
    /// the given probability pair.
    #[inline]
    pub(super) fn leaf(probability: [f64; 2]) -> Self {
        Self::Leaf(LeafNode { probability })
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Branch(ref node)
                => node.left.leaves() + node.right.leaves(),
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Returns the number of levels of this sub-tree.
    /// A single leaf counts as one level.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(ref node)
                => 1 + node.left.depth().max(node.right.depth()),
            Node::Leaf(_) => 1_usize,
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{feat} <= {thr:.2} ?\" ];\n",
                    feat = b.rule.feature,
                    thr = b.rule.threshold.0,
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1,
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id,
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"[{p0:.2}, {p1:.2}]\", \
                     shape = box, \
                     ];\n",
                    p0 = l.probability[0],
                    p1 = l.probability[1],
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn probability(&self, _sample: &Sample, _row: usize) -> [f64; 2] {
        self.probability
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn probability(&self, sample: &Sample, row: usize) -> [f64; 2] {
        match self.rule.split(sample, row) {
            LR::Left => self.left.probability(sample, row),
            LR::Right => self.right.probability(sample, row),
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn probability(&self, sample: &Sample, row: usize) -> [f64; 2] {
        match self {
            Node::Branch(ref node) => node.probability(sample, row),
            Node::Leaf(ref node) => node.probability(sample, row),
        }
    }
}

use serde::{Serialize, Deserialize};
use std::cmp;
use std::fmt;
use std::ops;


/// Struct `Depth` defines the level of a node in a tree.
/// This is just a wrapper for `usize`.
/// The root node lives at depth `1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub(crate) struct Depth(usize);


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.0;
        write!(f, "{depth}")
    }
}


impl From<usize> for Depth {
    #[inline]
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl From<Depth> for usize {
    #[inline]
    fn from(depth: Depth) -> Self {
        depth.0
    }
}


impl ops::Add<usize> for Depth {
    type Output = Self;
    /// Defines the addition of the `Depth` struct.
    /// Children of a node at depth `d` live at depth `d + 1`.
    #[inline]
    fn add(self, other: usize) -> Self::Output {
        Self(self.0 + other)
    }
}


/// Threshold of a splitting rule.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub(crate) struct Threshold(pub(crate) f64);


impl From<f64> for Threshold {
    #[inline]
    fn from(threshold: f64) -> Self {
        Self(threshold)
    }
}


/// Impurity of the rows on a node.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[repr(transparent)]
pub(crate) struct Impurity(pub(crate) f64);


impl From<f64> for Impurity {
    #[inline]
    fn from(impurity: f64) -> Self {
        Self(impurity)
    }
}


impl ops::Add<Self> for Impurity {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}


impl ops::Mul<Impurity> for f64 {
    type Output = Impurity;
    /// Weight an impurity by the relative size of a partition.
    #[inline]
    fn mul(self, rhs: Impurity) -> Self::Output {
        Impurity(self * rhs.0)
    }
}


impl ops::Sub<Self> for Impurity {
    type Output = Gain;
    /// The impurity reduction from a parent node to
    /// the weighted sum over its children is an information gain.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Gain(self.0 - rhs.0)
    }
}


impl cmp::PartialEq<f64> for Impurity {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0.eq(other)
    }
}


/// Information gain achieved by a splitting rule.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[repr(transparent)]
pub(crate) struct Gain(pub(crate) f64);


impl From<f64> for Gain {
    #[inline]
    fn from(gain: f64) -> Self {
        Self(gain)
    }
}


impl cmp::PartialEq<f64> for Gain {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0.eq(other)
    }
}


impl cmp::PartialOrd<f64> for Gain {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_add_01() {
        let d1 = Depth::from(1);
        let res = d1 + 1;
        let exp = Depth::from(2);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_depth_cmp_01() {
        let d1 = Depth::from(7);
        let d2 = Depth::from(6);
        let res = d1 > d2;
        assert!(res, "failed for {d1:?} > {d2:?}. got {res}.");
    }

    #[test]
    fn test_impurity_weighting_01() {
        let imp = Impurity::from(0.5);
        let res = 0.5 * imp + 0.5 * imp;
        let exp = Impurity::from(0.5);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_impurity_sub_01() {
        let parent = Impurity::from(0.5);
        let children = Impurity::from(0.0);
        let res = parent - children;
        let exp = Gain::from(0.5);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_gain_cmp_01() {
        let gain = Gain::from(0.0);
        let res = gain <= 0.0;
        assert!(res, "failed for {gain:?} <= 0.0. got {res}.");
    }
}

use serde::{Serialize, Deserialize};

use std::fmt;


/// A category value of the target column.
/// Binary classification needs exactly two distinct labels;
/// they may be numeric-coded (`0/1`, `±1`, ...) or textual.
/// The derived ordering sorts numeric labels by value and
/// textual labels lexicographically,
/// which fixes the order of every probability pair this crate emits.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Label {
    /// A numeric-coded category value.
    Numeric(f64),
    /// A textual category value.
    Text(String),
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}


impl From<f64> for Label {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}


impl From<&str> for Label {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

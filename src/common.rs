//! Defines some common items used in this library.

/// Defines thin wrappers for the quantities of the growing algorithm.
pub(crate) mod type_and_struct;

/// Defines schema checker functions.
pub(crate) mod checker;

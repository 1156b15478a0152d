//! Failures reported by tree queries.

use thiserror::Error;

/// The error type for tree operations that can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// No held element is equal to the requested value.
    #[error("element not found")]
    ElementNotFound,

    /// The value is the tree's maximum, so no successor exists.
    #[error("no successor: the value is the maximum")]
    NoSuccessor,

    /// The value is the tree's minimum, so no predecessor exists.
    #[error("no predecessor: the value is the minimum")]
    NoPredecessor,
}

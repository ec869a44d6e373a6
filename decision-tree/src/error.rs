//! Navigation error types.
//!
//! Returned by every mutating operation on
//! [`DecisionTreeNavigator`](crate::navigator::DecisionTreeNavigator). A failed
//! operation never mutates the session.

use thiserror::Error;

/// Error from a navigator operation.
///
/// `AtStart` and `InvalidJumpTarget` are expected, recoverable signals (the
/// presentation layer normally disables the control first). `NodeNotFound` means
/// the content graph is malformed and should be surfaced, not swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The requested node id is not a key of the decision graph.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// `back()` was called with an empty history.
    #[error("already at the start node")]
    AtStart,

    /// `jump_to` index is out of range or does not hold the requested node.
    #[error("invalid jump target: index {index} against history of length {history_len}")]
    InvalidJumpTarget { index: usize, history_len: usize },

    /// The current node has no option leading to the requested node.
    #[error("node '{from}' has no option leading to '{target}'")]
    NoSuchOption { from: String, target: String },

    /// Navigating further would exceed the configured history cap.
    #[error("history limit of {limit} entries reached")]
    HistoryLimit { limit: usize },

    /// The requested start node can be reached again by following options from it.
    #[error("node '{0}' cannot be a start node: its options lead back to it")]
    StartOnCycle(String),
}

impl NavigationError {
    /// True when the error points at a malformed graph rather than a user action.
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::NodeNotFound(_))
    }
}

//! Graph build and load error.
//!
//! Returned by `DecisionGraphBuilder::build` when the start node is missing or
//! options reference unknown nodes, and by graph sources when a document cannot
//! be read or parsed.

use std::path::PathBuf;

use thiserror::Error;

/// Error when building or loading a decision graph.
///
/// Build validation ensures the start id exists, node ids are unique, no option
/// leads back into the start node, and (under `DanglingPolicy::Reject`) every
/// option target is a registered node.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No start id was set on the builder.
    #[error("graph has no designated start node")]
    MissingStart,

    /// The designated start id is not a registered node.
    #[error("start node not found: {0}")]
    StartNotFound(String),

    /// Two nodes were registered with the same id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// An option points at an id that is not a registered node.
    #[error("option on '{from}' points at unknown node '{target}'")]
    DanglingOption { from: String, target: String },

    /// An option leads back into the start node.
    #[error("option on '{from}' leads back into the start node")]
    StartTargeted { from: String },

    /// The graph document could not be read.
    #[error("failed to read graph from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The graph document is not valid JSON for the expected shape.
    #[error("failed to parse graph document: {0}")]
    Parse(#[from] serde_json::Error),
}

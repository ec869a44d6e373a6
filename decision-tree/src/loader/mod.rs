//! Graph sources: resolve a decision graph into memory before a session starts.
//!
//! The navigator assumes lookups have no latency, so anything backed by disk or
//! a document store is loaded completely through a [`GraphSource`] first.
//!
//! | Type              | Backing            |
//! |-------------------|--------------------|
//! | [`JsonFileSource`] | JSON file on disk  |
//! | [`InMemorySource`] | `GraphDocument` value |

mod in_memory;
mod json_file;

use async_trait::async_trait;

use crate::graph::{DecisionGraph, GraphError};

pub use in_memory::InMemorySource;
pub use json_file::JsonFileSource;

/// Loads and validates a complete decision graph.
#[async_trait]
pub trait GraphSource: Send + Sync {
    async fn load(&self) -> Result<DecisionGraph, GraphError>;
}

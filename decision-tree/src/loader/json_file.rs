//! JSON file graph source.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::graph::{DanglingPolicy, DecisionGraph, GraphDocument, GraphError};

use super::GraphSource;

/// Reads a [`GraphDocument`] from a JSON file and builds it.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    policy: DanglingPolicy,
}

impl JsonFileSource {
    /// Source with `DanglingPolicy::Reject`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: DanglingPolicy::Reject,
        }
    }

    pub fn with_policy(mut self, policy: DanglingPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[async_trait]
impl GraphSource for JsonFileSource {
    async fn load(&self) -> Result<DecisionGraph, GraphError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| GraphError::Io {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Read graph document");
        GraphDocument::from_slice(&bytes)?.into_graph(self.policy)
    }
}

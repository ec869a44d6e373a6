//! In-memory graph source for tests and embedded content.

use async_trait::async_trait;

use crate::graph::{DanglingPolicy, DecisionGraph, GraphDocument, GraphError};

use super::GraphSource;

/// Builds a graph from a document held in memory. Each `load` builds a fresh graph.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    document: GraphDocument,
    policy: DanglingPolicy,
}

impl InMemorySource {
    pub fn new(document: GraphDocument) -> Self {
        Self {
            document,
            policy: DanglingPolicy::Reject,
        }
    }

    pub fn with_policy(mut self, policy: DanglingPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[async_trait]
impl GraphSource for InMemorySource {
    async fn load(&self) -> Result<DecisionGraph, GraphError> {
        self.document.clone().into_graph(self.policy)
    }
}

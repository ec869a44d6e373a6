//! Serializable graph document (graph <-> JSON).
//!
//! The on-disk and in-transit form of a decision graph: a start id plus the list
//! of nodes in display order. Converted into a validated [`DecisionGraph`] with
//! [`GraphDocument::into_graph`].

use serde::{Deserialize, Serialize};

use super::builder::DanglingPolicy;
use super::decision_graph::DecisionGraph;
use super::graph_error::GraphError;
use super::node::DecisionNode;

/// JSON document describing a decision graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub start: String,
    pub nodes: Vec<DecisionNode>,
}

impl GraphDocument {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, GraphError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the document and builds the graph under `policy`.
    pub fn into_graph(self, policy: DanglingPolicy) -> Result<DecisionGraph, GraphError> {
        let mut builder = DecisionGraph::builder();
        builder.start(self.start).dangling_policy(policy);
        for node in self.nodes {
            builder.add_node(node);
        }
        builder.build()
    }
}

impl From<&DecisionGraph> for GraphDocument {
    fn from(graph: &DecisionGraph) -> Self {
        Self {
            start: graph.start.clone(),
            nodes: graph.nodes().cloned().collect(),
        }
    }
}

//! Graph validation report for the `validate` command.

use std::io::{self, Write};

use decision_tree::{DecisionGraph, NodeLookup};
use serde::Serialize;

use crate::config::{Error, SessionConfig};
use crate::run::load_graph;

/// An option whose target is not a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingEdge {
    pub from: String,
    pub target: String,
}

/// Structural findings about a loaded graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    pub start: String,
    pub node_count: usize,
    pub terminal_nodes: Vec<String>,
    pub unreachable_nodes: Vec<String>,
    pub dangling_options: Vec<DanglingEdge>,
    pub has_cycle: bool,
}

impl GraphReport {
    pub fn from_graph(graph: &DecisionGraph) -> Self {
        Self {
            start: graph.start_id().to_string(),
            node_count: graph.len(),
            terminal_nodes: graph.terminal_nodes(),
            unreachable_nodes: graph.unreachable_nodes(),
            dangling_options: graph
                .dangling_options()
                .into_iter()
                .map(|(from, target)| DanglingEdge { from, target })
                .collect(),
            has_cycle: graph.has_cycle(),
        }
    }

    /// No unreachable nodes, no dangling options, no cycles.
    pub fn is_clean(&self) -> bool {
        self.unreachable_nodes.is_empty() && self.dangling_options.is_empty() && !self.has_cycle
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "start: {}", self.start)?;
        writeln!(out, "nodes: {}", self.node_count)?;
        writeln!(out, "terminal: {}", self.terminal_nodes.join(", "))?;
        if !self.unreachable_nodes.is_empty() {
            writeln!(out, "unreachable: {}", self.unreachable_nodes.join(", "))?;
        }
        for edge in &self.dangling_options {
            writeln!(out, "dangling: {} -> {}", edge.from, edge.target)?;
        }
        if self.has_cycle {
            writeln!(out, "cycle: reachable from start")?;
        }
        writeln!(out, "status: {}", if self.is_clean() { "ok" } else { "warnings" })
    }
}

/// Loads the configured graph and reports on it. Build failures are returned as errors.
pub async fn validate(config: &SessionConfig) -> Result<GraphReport, Error> {
    let graph = load_graph(config).await?;
    Ok(GraphReport::from_graph(&graph))
}

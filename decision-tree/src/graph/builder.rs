//! Decision graph builder: register nodes, designate the start node, then build.
//!
//! Add nodes with `add_node`, set the entry point with `start`, choose how
//! dangling option targets are treated with `dangling_policy`, then `build` to
//! get an immutable, validated `DecisionGraph`.

use std::collections::HashMap;

use super::decision_graph::DecisionGraph;
use super::graph_error::GraphError;
use super::logging;
use super::node::DecisionNode;

/// What `build` does with an option whose target is not a registered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingPolicy {
    /// Fail the build with `GraphError::DanglingOption`.
    #[default]
    Reject,
    /// Accept the graph and log a warning; navigating to the target later
    /// fails with `NavigationError::NodeNotFound`.
    Allow,
}

/// Builder for [`DecisionGraph`].
///
/// Nodes keep registration order, which is the iteration order of the built
/// graph and the order validation findings are reported in.
#[derive(Debug, Default)]
pub struct DecisionGraphBuilder {
    nodes: Vec<DecisionNode>,
    start: Option<String>,
    dangling: DanglingPolicy,
}

impl DecisionGraphBuilder {
    /// Creates an empty builder with `DanglingPolicy::Reject`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the designated start identifier. It must name a registered node by `build` time.
    pub fn start(&mut self, id: impl Into<String>) -> &mut Self {
        self.start = Some(id.into());
        self
    }

    /// Registers a node. Ids must be unique; a repeated id fails `build`.
    pub fn add_node(&mut self, node: DecisionNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn dangling_policy(&mut self, policy: DanglingPolicy) -> &mut Self {
        self.dangling = policy;
        self
    }

    /// Validates and freezes the graph.
    ///
    /// Returns `GraphError` if the start node is unset or unknown, an id is
    /// registered twice, an option leads back into the start node, or (under
    /// `DanglingPolicy::Reject`) an option points at an unknown node.
    pub fn build(self) -> Result<DecisionGraph, GraphError> {
        let start = self.start.ok_or(GraphError::MissingStart)?;

        let mut order = Vec::with_capacity(self.nodes.len());
        let mut nodes = HashMap::with_capacity(self.nodes.len());
        for node in self.nodes {
            if nodes.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
            order.push(node.id.clone());
            nodes.insert(node.id.clone(), node);
        }

        if !nodes.contains_key(&start) {
            return Err(GraphError::StartNotFound(start));
        }

        for id in &order {
            let node = &nodes[id];
            for option in &node.options {
                if option.target == start {
                    return Err(GraphError::StartTargeted { from: id.clone() });
                }
                if nodes.contains_key(&option.target) {
                    continue;
                }
                match self.dangling {
                    DanglingPolicy::Reject => {
                        return Err(GraphError::DanglingOption {
                            from: id.clone(),
                            target: option.target.clone(),
                        });
                    }
                    DanglingPolicy::Allow => logging::log_dangling_option(id, &option.target),
                }
            }
        }

        let graph = DecisionGraph {
            nodes,
            order,
            start,
        };
        if graph.has_cycle() {
            logging::log_cycle_detected(&graph.start);
        }
        logging::log_graph_built(&graph.start, graph.len());
        Ok(graph)
    }
}

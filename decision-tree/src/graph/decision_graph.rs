//! Built decision graph: immutable, read-only, shared between sessions.
//!
//! Produced by `DecisionGraphBuilder::build` or `GraphDocument::into_graph`.
//! Besides lookup it offers the read-only analyses used for diagnostics:
//! dangling options, unreachable nodes, terminal nodes and cycle detection.

use std::collections::{HashMap, HashSet, VecDeque};

use super::builder::DecisionGraphBuilder;
use super::lookup::NodeLookup;
use super::node::DecisionNode;

/// Immutable mapping from node id to [`DecisionNode`] with a designated start node.
///
/// The start node always exists. Option targets exist unless the graph was
/// built with `DanglingPolicy::Allow`.
#[derive(Debug, Clone)]
pub struct DecisionGraph {
    pub(super) nodes: HashMap<String, DecisionNode>,
    /// Node ids in registration order.
    pub(super) order: Vec<String>,
    pub(super) start: String,
}

impl DecisionGraph {
    pub fn builder() -> DecisionGraphBuilder {
        DecisionGraphBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &DecisionNode> + '_ {
        self.order.iter().filter_map(move |id| self.nodes.get(id))
    }

    /// True when `from` exists and has an option leading to `to`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.nodes
            .get(from)
            .map(|n| n.has_option_to(to))
            .unwrap_or(false)
    }

    /// `(from, target)` for every option whose target is not a node, in registration order.
    pub fn dangling_options(&self) -> Vec<(String, String)> {
        self.nodes()
            .flat_map(|node| {
                node.options
                    .iter()
                    .filter(|o| !self.nodes.contains_key(&o.target))
                    .map(move |o| (node.id.clone(), o.target.clone()))
            })
            .collect()
    }

    /// Ids of nodes with no options, in registration order.
    pub fn terminal_nodes(&self) -> Vec<String> {
        self.nodes()
            .filter(|n| n.is_terminal())
            .map(|n| n.id.clone())
            .collect()
    }

    /// Ids of nodes that no sequence of options from the start node reaches.
    pub fn unreachable_nodes(&self) -> Vec<String> {
        let reachable = self.reachable_from_start();
        self.order
            .iter()
            .filter(|id| !reachable.contains(id.as_str()))
            .cloned()
            .collect()
    }

    /// True when some cycle is reachable from the start node through options.
    pub fn has_cycle(&self) -> bool {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            Visiting,
            Done,
        }

        let mut marks: HashMap<&str, Mark> = HashMap::new();
        // (node id, index of the next option to explore)
        let mut stack: Vec<(&str, usize)> = vec![(self.start.as_str(), 0)];
        marks.insert(self.start.as_str(), Mark::Visiting);

        while let Some((id, next)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let Some(option) = node.options.get(next) else {
                marks.insert(id, Mark::Done);
                continue;
            };
            stack.push((id, next + 1));
            let target = option.target.as_str();
            if !self.nodes.contains_key(target) {
                continue;
            }
            match marks.get(target) {
                Some(Mark::Visiting) => return true,
                Some(Mark::Done) => {}
                None => {
                    marks.insert(target, Mark::Visiting);
                    stack.push((target, 0));
                }
            }
        }
        false
    }

    fn reachable_from_start(&self) -> HashSet<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        seen.insert(self.start.as_str());
        queue.push_back(self.start.as_str());
        while let Some(id) = queue.pop_front() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            for option in &node.options {
                let target = option.target.as_str();
                if self.nodes.contains_key(target) && seen.insert(target) {
                    queue.push_back(target);
                }
            }
        }
        seen
    }
}

impl NodeLookup for DecisionGraph {
    fn lookup(&self, id: &str) -> Option<&DecisionNode> {
        self.nodes.get(id)
    }

    fn start_id(&self) -> &str {
        &self.start
    }
}

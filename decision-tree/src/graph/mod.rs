//! Decision graph: nodes with labeled options, a designated start node, build-time validation.
//!
//! Register nodes on a `DecisionGraphBuilder`, set the start id, then `build`
//! to get an immutable `DecisionGraph`. The navigator only needs the
//! [`NodeLookup`] capability, which `DecisionGraph` implements.

mod builder;
mod decision_graph;
mod document;
mod graph_error;
pub mod logging;
mod lookup;
mod node;

pub use builder::{DanglingPolicy, DecisionGraphBuilder};
pub use decision_graph::DecisionGraph;
pub use document::GraphDocument;
pub use graph_error::GraphError;
pub use lookup::NodeLookup;
pub use node::{DecisionNode, NodeKind, NodeOption};

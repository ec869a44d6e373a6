//! # Decision tree navigator
//!
//! Step through a directed graph of guidance nodes: follow an option forward, go
//! back one step, jump back to any breadcrumb, or reset to the start. History
//! bookkeeping stays consistent under every operation, and a failed operation
//! never leaves the session half-changed.
//!
//! ## Main Modules
//!
//! - [`graph`]: `DecisionNode`, `DecisionGraphBuilder`, `DecisionGraph`, `GraphDocument`,
//!   and the `NodeLookup` capability the navigator is generic over.
//! - [`navigator`]: `DecisionTreeNavigator`, `Session`, `BreadcrumbTrail`, `NavigatorView`.
//! - [`loader`]: `GraphSource` implementations that load a complete graph before a session starts.
//! - [`error`]: `NavigationError`.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use decision_tree::{DecisionGraph, DecisionNode, DecisionTreeNavigator, NodeKind};
//!
//! let mut builder = DecisionGraph::builder();
//! builder
//!     .start("start")
//!     .add_node(DecisionNode::new("start", NodeKind::Start, "Begin").with_option("Next", "a"))
//!     .add_node(DecisionNode::new("a", NodeKind::Outcome, "Done"));
//! let graph = Arc::new(builder.build().unwrap());
//!
//! let mut nav = DecisionTreeNavigator::new(graph).unwrap();
//! nav.navigate("a").unwrap();
//! assert_eq!(nav.history(), ["start".to_string()]);
//! nav.back().unwrap();
//! assert!(nav.is_at_start());
//! ```

pub mod error;
pub mod graph;
pub mod loader;
pub mod navigator;

pub use error::NavigationError;
pub use graph::{
    DanglingPolicy, DecisionGraph, DecisionGraphBuilder, DecisionNode, GraphDocument, GraphError,
    NodeKind, NodeLookup, NodeOption,
};
pub use loader::{GraphSource, InMemorySource, JsonFileSource};
pub use navigator::{
    Breadcrumb, BreadcrumbTrail, DecisionTreeNavigator, NavigatorConfig, NavigatorView, Session,
    DEFAULT_BREADCRUMB_WINDOW,
};

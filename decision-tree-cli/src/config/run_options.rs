//! Optional overrides for a session (CLI args or programmatic).
//!
//! Used by [`SessionConfig::apply_options`](super::SessionConfig::apply_options).
//! Callers (binary or tests) build a `RunOptions` and pass it to get env-based
//! config with overrides applied.

use std::path::PathBuf;

/// Optional overrides: graph file, start node, breadcrumb window, history cap.
///
/// All fields are optional; only set fields override the base config (from env).
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Path to the graph document (overrides `DECISION_TREE_GRAPH`).
    pub graph: Option<PathBuf>,
    /// Start node id (overrides `DECISION_TREE_START` and the document's start).
    pub start: Option<String>,
    /// Breadcrumb window size.
    pub breadcrumb_window: Option<usize>,
    /// History cap for graphs with cycles.
    pub max_history: Option<usize>,
    /// Accept options pointing at unknown nodes.
    pub allow_dangling: bool,
    /// Show debug logs on stderr.
    pub verbose: bool,
}

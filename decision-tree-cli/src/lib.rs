//! decision-tree-cli library: terminal presentation layer for the decision-tree navigator.
//!
//! Reads config from .env / env vars (overridable with [`RunOptions`]), loads the
//! graph document, and runs an interactive shell that renders the current node,
//! the breadcrumb trail and the available actions.
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let options = decision_tree_cli::RunOptions {
//!     graph: Some("data/sample_graph.json".into()),
//!     ..Default::default()
//! };
//! decision_tree_cli::run(&options).await?;
//! ```

mod config;
mod logging;
mod run;
pub mod shell;
mod validate;

pub use config::{Error, RunOptions, SessionConfig};
pub use logging::init_logging;
pub use run::{build_navigator, load_config, load_graph, run, run_with_io};
pub use validate::{validate, DanglingEdge, GraphReport};

#[cfg(test)]
mod tests;

//! Configuration for running a navigator session.
//!
//! Re-exports [`SessionConfig`], [`RunOptions`] and config [`Error`].

mod run_options;
mod session_config;

pub use run_options::RunOptions;
pub use session_config::{Error, SessionConfig};

//! Run entry points: load config, load the graph, drive the shell.
//!
//! Re-exports [`run`], [`run_with_io`] and [`Error`].

pub use crate::config::Error;

use std::io::{BufRead, Write};
use std::sync::Arc;

use decision_tree::{DecisionGraph, DecisionTreeNavigator, GraphSource, JsonFileSource};

use crate::config::{RunOptions, SessionConfig};
use crate::shell::run_shell;

/// Builds config from `.env` / env vars with `options` applied on top.
pub fn load_config(options: &RunOptions) -> Result<SessionConfig, Error> {
    dotenv::dotenv().ok();
    let mut config = SessionConfig::from_env()?;
    config.apply_options(options);
    Ok(config)
}

/// Loads the configured graph document completely into memory.
pub async fn load_graph(config: &SessionConfig) -> Result<Arc<DecisionGraph>, Error> {
    let path = config.graph_path()?;
    let source = JsonFileSource::new(path).with_policy(config.dangling_policy());
    let graph = source.load().await?;
    tracing::info!(path = %path.display(), nodes = graph.len(), "Graph loaded");
    Ok(Arc::new(graph))
}

/// Navigator over `graph`, positioned on the configured start (or the graph's own).
pub fn build_navigator(
    graph: Arc<DecisionGraph>,
    config: &SessionConfig,
) -> Result<DecisionTreeNavigator, Error> {
    let navigator = match &config.start {
        Some(start) => DecisionTreeNavigator::starting_at(graph, start.clone())?,
        None => DecisionTreeNavigator::new(graph)?,
    };
    Ok(navigator.with_config(config.navigator_config()))
}

/// Runs one interactive session with the given config over `input` / `out`.
pub async fn run_with_io<R: BufRead, W: Write>(
    config: &SessionConfig,
    input: R,
    out: &mut W,
) -> Result<(), Error> {
    let graph = load_graph(config).await?;
    let mut navigator = build_navigator(graph, config)?;
    run_shell(&mut navigator, input, out)?;
    tracing::debug!(
        final_node = navigator.current_id(),
        history_len = navigator.history().len(),
        "Session closed"
    );
    Ok(())
}

/// Runs one interactive session on stdin/stdout with config from env and `options`.
pub async fn run(options: &RunOptions) -> Result<(), Error> {
    let config = load_config(options)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_with_io(&config, stdin.lock(), &mut stdout).await
}

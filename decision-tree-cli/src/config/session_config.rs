//! Session config: graph path, start node, breadcrumb window, history cap. Filled from env / .env.
//!
//! Interacts with [`RunOptions`](super::RunOptions), [`run`](crate::run) and the
//! library's [`NavigatorConfig`](decision_tree::NavigatorConfig).

use std::path::{Path, PathBuf};

use decision_tree::{DanglingPolicy, NavigatorConfig, DEFAULT_BREADCRUMB_WINDOW};

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Session config. Can be filled from env / .env, then overridden by [`RunOptions`](super::RunOptions).
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Graph document path. Required before a run; from `DECISION_TREE_GRAPH` or `--graph`.
    pub graph_path: Option<PathBuf>,
    /// Start node id. Default: the document's own start.
    pub start: Option<String>,
    /// Breadcrumb window size. Default: 5.
    pub breadcrumb_window: usize,
    /// History cap. Default: unbounded.
    pub max_history: Option<usize>,
    /// When true, dangling option targets are accepted at load time.
    pub allow_dangling: bool,
    /// When true, show debug logs.
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            start: None,
            breadcrumb_window: DEFAULT_BREADCRUMB_WINDOW,
            max_history: None,
            allow_dangling: false,
            verbose: false,
        }
    }
}

impl SessionConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` or load inside `run()`.
    ///
    /// `DECISION_TREE_GRAPH`, `DECISION_TREE_START`, `DECISION_TREE_BREADCRUMB_WINDOW`,
    /// `DECISION_TREE_MAX_HISTORY`, `DECISION_TREE_ALLOW_DANGLING` are all optional.
    /// Malformed numbers are an error rather than silently falling back.
    pub fn from_env() -> Result<Self, Error> {
        let graph_path = std::env::var("DECISION_TREE_GRAPH").ok().map(PathBuf::from);
        let start = std::env::var("DECISION_TREE_START").ok();
        let breadcrumb_window = parse_env_usize("DECISION_TREE_BREADCRUMB_WINDOW")?
            .unwrap_or(DEFAULT_BREADCRUMB_WINDOW);
        let max_history = parse_env_usize("DECISION_TREE_MAX_HISTORY")?;
        let allow_dangling = std::env::var("DECISION_TREE_ALLOW_DANGLING")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self {
            graph_path,
            start,
            breadcrumb_window,
            max_history,
            allow_dangling,
            verbose: false,
        })
    }

    /// Apply optional overrides from `RunOptions` to this config.
    ///
    /// Only set fields in `options` override; `allow_dangling` can only be
    /// switched on, never off.
    pub fn apply_options(&mut self, options: &super::RunOptions) {
        if let Some(p) = &options.graph {
            self.graph_path = Some(p.clone());
        }
        if let Some(s) = &options.start {
            self.start = Some(s.clone());
        }
        if let Some(w) = options.breadcrumb_window {
            self.breadcrumb_window = w;
        }
        if let Some(m) = options.max_history {
            self.max_history = Some(m);
        }
        if options.allow_dangling {
            self.allow_dangling = true;
        }
        self.verbose = options.verbose;
    }

    /// The graph path, or an error explaining how to set it.
    pub fn graph_path(&self) -> Result<&Path, Error> {
        self.graph_path.as_deref().ok_or_else(|| {
            Error::from(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "DECISION_TREE_GRAPH is not set; pass --graph or configure it in .env",
            ))
        })
    }

    pub fn dangling_policy(&self) -> DanglingPolicy {
        if self.allow_dangling {
            DanglingPolicy::Allow
        } else {
            DanglingPolicy::Reject
        }
    }

    /// Builds the library [`NavigatorConfig`] from this config.
    pub fn navigator_config(&self) -> NavigatorConfig {
        NavigatorConfig {
            breadcrumb_window: self.breadcrumb_window,
            max_history: self.max_history,
        }
    }
}

fn parse_env_usize(name: &str) -> Result<Option<usize>, Error> {
    match std::env::var(name) {
        Ok(v) => v
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| {
                Error::from(format!(
                    "{} must be a non-negative integer, got '{}': {}",
                    name, v, e
                ))
            }),
        Err(_) => Ok(None),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

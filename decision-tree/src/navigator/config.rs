//! Navigator config: breadcrumb window and optional history cap.

use super::breadcrumb::DEFAULT_BREADCRUMB_WINDOW;

/// Per-navigator settings. Presentation constants, not graph properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Number of history entries shown in the breadcrumb trail. Default: 5.
    pub breadcrumb_window: usize,
    /// Upper bound on history length. `None` (default) means unbounded; set it
    /// when the graph contains cycles.
    pub max_history: Option<usize>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            breadcrumb_window: DEFAULT_BREADCRUMB_WINDOW,
            max_history: None,
        }
    }
}

impl NavigatorConfig {
    pub fn with_breadcrumb_window(mut self, window: usize) -> Self {
        self.breadcrumb_window = window;
        self
    }

    pub fn with_max_history(mut self, limit: usize) -> Self {
        self.max_history = Some(limit);
        self
    }
}

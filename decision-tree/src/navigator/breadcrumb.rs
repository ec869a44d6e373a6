//! Breadcrumb trail: a windowed, read-only projection of history.
//!
//! Each visible entry carries its true index into the full history, so a jump
//! issued from the trail lands on the right node even when older entries are
//! hidden by the window.

use serde::Serialize;

use super::session::Session;

/// Number of history entries shown when no window is configured.
pub const DEFAULT_BREADCRUMB_WINDOW: usize = 5;

/// A clickable entry: a visited node and its index into the full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub node_id: String,
    pub history_index: usize,
}

/// Visible breadcrumb entries (oldest first) plus the non-clickable current node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbTrail {
    pub entries: Vec<Breadcrumb>,
    pub current: String,
    /// Older history entries not shown because of the window.
    pub hidden: usize,
}

impl BreadcrumbTrail {
    /// Shows the last `window` entries of `history` in chronological order.
    pub fn derive(history: &[String], current: &str, window: usize) -> Self {
        let first = history.len().saturating_sub(window);
        let entries = history[first..]
            .iter()
            .enumerate()
            .map(|(offset, id)| Breadcrumb {
                node_id: id.clone(),
                history_index: first + offset,
            })
            .collect();
        Self {
            entries,
            current: current.to_string(),
            hidden: first,
        }
    }

    pub fn from_session(session: &Session, window: usize) -> Self {
        Self::derive(session.history(), session.current(), window)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry with the given true history index, if it is visible.
    pub fn find(&self, history_index: usize) -> Option<&Breadcrumb> {
        self.entries
            .iter()
            .find(|b| b.history_index == history_index)
    }
}

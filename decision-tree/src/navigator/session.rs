//! Session: the current node plus the path taken to reach it.

use serde::Serialize;

/// One user's walk through the graph. Owned by a single navigator, never persisted.
///
/// `history` excludes `current` and is empty exactly when `current` is the start
/// node. Two sessions are equal when both fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Session {
    current: String,
    history: Vec<String>,
}

impl Session {
    /// Fresh session positioned on `start`.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Visited path including the current node, oldest first.
    pub fn path(&self) -> impl Iterator<Item = &str> + '_ {
        self.history
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.current.as_str()))
    }

    /// Node occupying `index` of the path: a history entry, or `current` at `index == history.len()`.
    pub fn node_at(&self, index: usize) -> Option<&str> {
        match index.cmp(&self.history.len()) {
            std::cmp::Ordering::Less => Some(self.history[index].as_str()),
            std::cmp::Ordering::Equal => Some(self.current.as_str()),
            std::cmp::Ordering::Greater => None,
        }
    }

    pub(super) fn advance(&mut self, target: String) {
        let previous = std::mem::replace(&mut self.current, target);
        self.history.push(previous);
    }

    pub(super) fn retreat(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Truncates to `index` entries and makes the node at `index` current.
    ///
    /// Caller guarantees `index <= history.len()`.
    pub(super) fn rewind_to(&mut self, index: usize) {
        if index < self.history.len() {
            self.current = self.history[index].clone();
            self.history.truncate(index);
        }
    }
}

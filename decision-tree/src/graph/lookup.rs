//! The single capability the navigator needs from a graph.

use super::node::DecisionNode;

/// Synchronous, side-effect-free node lookup with a designated entry point.
///
/// Implementors backed by disk or network storage must be fully loaded before a
/// navigator is constructed over them; lookups are assumed to have no latency.
pub trait NodeLookup: Send + Sync {
    /// Returns the node for `id`, or `None` if the graph has no such key.
    fn lookup(&self, id: &str) -> Option<&DecisionNode>;

    /// The designated start identifier.
    fn start_id(&self) -> &str;

    /// Convenience check for callers. Must agree with [`lookup`](Self::lookup);
    /// the navigator itself only consults `lookup`.
    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }
}

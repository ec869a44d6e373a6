//! Logging utilities for graph construction and navigation.
//!
//! Structured `tracing` events for graph builds, validation findings and
//! navigator transitions.

/// Log a successfully built graph.
pub fn log_graph_built(start_id: &str, node_count: usize) {
    tracing::info!(start_id, node_count, "Decision graph built");
}

/// Log an option whose target is not a registered node.
///
/// Only emitted when the graph is built with `DanglingPolicy::Allow`.
pub fn log_dangling_option(from: &str, target: &str) {
    tracing::warn!(from, target, "Option points at unknown node");
}

/// Log that a cycle is reachable from the start node through forward options.
pub fn log_cycle_detected(start_id: &str) {
    tracing::warn!(start_id, "Cycle reachable from start node; history may grow unbounded");
}

/// Log a completed navigator transition.
pub fn log_transition(operation: &str, current: &str, history_len: usize) {
    tracing::debug!(operation, current, history_len, "Navigator transition");
}

/// Log a rejected navigator operation.
///
/// Data-integrity failures are logged at error level, everything else at debug.
pub fn log_rejected(operation: &str, error: &crate::error::NavigationError) {
    if error.is_data_integrity() {
        tracing::error!(operation, %error, "Navigator operation hit malformed graph");
    } else {
        tracing::debug!(operation, %error, "Navigator operation rejected");
    }
}

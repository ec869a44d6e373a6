//! Decision-tree navigator: navigate, back, jump_to and reset over one session.
//!
//! Every operation checks all preconditions before touching the session, so a
//! failed call leaves `(current, history)` exactly as it was.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::NavigationError;
use crate::graph::logging;
use crate::graph::{DecisionGraph, DecisionNode, NodeLookup};

use super::breadcrumb::BreadcrumbTrail;
use super::config::NavigatorConfig;
use super::session::Session;
use super::view::NavigatorView;

/// Owns one session over a shared, read-only graph.
///
/// Generic over the single capability it needs from the graph ([`NodeLookup`]).
/// The graph is held in an `Arc` so many navigators can walk one graph; each
/// navigator is exclusively owned by one interactive flow. Dropping it ends the
/// session.
///
/// **Interaction**: the presentation layer calls an operation, then renders
/// [`view`](Self::view).
pub struct DecisionTreeNavigator<G: NodeLookup = DecisionGraph> {
    graph: Arc<G>,
    start: String,
    session: Session,
    config: NavigatorConfig,
}

impl<G: NodeLookup> std::fmt::Debug for DecisionTreeNavigator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionTreeNavigator")
            .field("start", &self.start)
            .field("session", &self.session)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<G: NodeLookup> DecisionTreeNavigator<G> {
    /// Navigator positioned on the graph's designated start node.
    pub fn new(graph: Arc<G>) -> Result<Self, NavigationError> {
        let start = graph.start_id().to_string();
        Self::starting_at(graph, start)
    }

    /// Navigator positioned on `start` instead of the graph's designated start.
    ///
    /// Fails with `NodeNotFound` when `start` is not in the graph, and with
    /// `StartOnCycle` when following options from `start` can reach it again:
    /// the start node must only ever appear as the first history entry.
    pub fn starting_at(graph: Arc<G>, start: impl Into<String>) -> Result<Self, NavigationError> {
        let start = start.into();
        if graph.lookup(&start).is_none() {
            return Err(NavigationError::NodeNotFound(start));
        }
        if leads_back_to(graph.as_ref(), &start) {
            return Err(NavigationError::StartOnCycle(start));
        }
        Ok(Self {
            session: Session::new(start.clone()),
            graph,
            start,
            config: NavigatorConfig::default(),
        })
    }

    pub fn with_config(self, config: NavigatorConfig) -> Self {
        Self { config, ..self }
    }

    /// Follows an option of the current node to `target`.
    ///
    /// Pushes the current node onto history and makes `target` current. Fails
    /// with `NodeNotFound` if `target` is not in the graph, `NoSuchOption` if the
    /// current node has no option leading there, and `HistoryLimit` if a
    /// configured cap would be exceeded.
    pub fn navigate(&mut self, target: &str) -> Result<(), NavigationError> {
        if let Err(e) = self.check_navigate(target) {
            logging::log_rejected("navigate", &e);
            return Err(e);
        }
        self.session.advance(target.to_string());
        self.log_transition("navigate");
        Ok(())
    }

    /// Like [`navigate`](Self::navigate), but a `NodeNotFound` sends the user back
    /// to the start node instead of leaving them stranded. The error is still
    /// returned so the malformed graph can be reported.
    pub fn navigate_or_reset(&mut self, target: &str) -> Result<(), NavigationError> {
        match self.navigate(target) {
            Err(e) if e.is_data_integrity() => {
                self.reset();
                Err(e)
            }
            other => other,
        }
    }

    /// Returns to the previous node. Fails with `AtStart` when history is empty.
    pub fn back(&mut self) -> Result<(), NavigationError> {
        if !self.session.retreat() {
            let e = NavigationError::AtStart;
            logging::log_rejected("back", &e);
            return Err(e);
        }
        self.log_transition("back");
        Ok(())
    }

    /// Returns directly to the breadcrumb at `history_index`, discarding
    /// everything navigated since.
    ///
    /// `target` must be the node that occupies `history_index` in the current
    /// history (or the current node when `history_index == history.len()`).
    /// Equivalent to `history.len() - history_index` calls to [`back`](Self::back).
    pub fn jump_to(&mut self, target: &str, history_index: usize) -> Result<(), NavigationError> {
        if let Err(e) = self.check_jump(target, history_index) {
            logging::log_rejected("jump_to", &e);
            return Err(e);
        }
        self.session.rewind_to(history_index);
        self.log_transition("jump_to");
        Ok(())
    }

    /// Returns to the start node with an empty history. Idempotent.
    pub fn reset(&mut self) {
        self.session = Session::new(self.start.clone());
        self.log_transition("reset");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_id(&self) -> &str {
        self.session.current()
    }

    /// Node record of the current node.
    pub fn current_node(&self) -> &DecisionNode {
        self.graph
            .lookup(self.session.current())
            .expect("current node is checked against the graph on every transition")
    }

    pub fn history(&self) -> &[String] {
        self.session.history()
    }

    pub fn start_id(&self) -> &str {
        &self.start
    }

    pub fn can_go_back(&self) -> bool {
        !self.session.history().is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.session.history().is_empty()
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn graph(&self) -> &Arc<G> {
        &self.graph
    }

    /// Breadcrumb trail for the current session, windowed by the configured size.
    pub fn breadcrumbs(&self) -> BreadcrumbTrail {
        BreadcrumbTrail::from_session(&self.session, self.config.breadcrumb_window)
    }

    /// Everything the presentation layer needs to render the current state.
    pub fn view(&self) -> NavigatorView<'_> {
        let current = self.current_node();
        NavigatorView {
            current,
            can_go_back: self.can_go_back(),
            is_terminal: current.is_terminal(),
            breadcrumbs: self.breadcrumbs(),
        }
    }

    fn check_navigate(&self, target: &str) -> Result<(), NavigationError> {
        if self.graph.lookup(target).is_none() {
            return Err(NavigationError::NodeNotFound(target.to_string()));
        }
        if !self.current_node().has_option_to(target) {
            return Err(NavigationError::NoSuchOption {
                from: self.session.current().to_string(),
                target: target.to_string(),
            });
        }
        if let Some(limit) = self.config.max_history {
            if self.session.history().len() >= limit {
                return Err(NavigationError::HistoryLimit { limit });
            }
        }
        Ok(())
    }

    fn check_jump(&self, target: &str, history_index: usize) -> Result<(), NavigationError> {
        let invalid = NavigationError::InvalidJumpTarget {
            index: history_index,
            history_len: self.session.history().len(),
        };
        let Some(occupant) = self.session.node_at(history_index) else {
            return Err(invalid);
        };
        if self.graph.lookup(target).is_none() {
            return Err(NavigationError::NodeNotFound(target.to_string()));
        }
        if occupant != target {
            return Err(invalid);
        }
        Ok(())
    }

    fn log_transition(&self, operation: &str) {
        logging::log_transition(
            operation,
            self.session.current(),
            self.session.history().len(),
        );
    }
}

/// True when some path of options out of `id` arrives at `id` again.
fn leads_back_to<G: NodeLookup + ?Sized>(graph: &G, id: &str) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![id];
    while let Some(current) = stack.pop() {
        let Some(node) = graph.lookup(current) else {
            continue;
        };
        for option in &node.options {
            let target = option.target.as_str();
            if target == id {
                return true;
            }
            if seen.insert(target) {
                stack.push(target);
            }
        }
    }
    false
}

//! What the presentation layer renders after every operation.

use crate::graph::DecisionNode;

use super::breadcrumb::BreadcrumbTrail;

/// Current node content, whether `back` is legal, and the breadcrumb trail.
///
/// `is_terminal` nodes get a single "restart" affordance bound to `reset()`.
#[derive(Debug, Clone)]
pub struct NavigatorView<'a> {
    pub current: &'a DecisionNode,
    pub can_go_back: bool,
    pub is_terminal: bool,
    pub breadcrumbs: BreadcrumbTrail,
}

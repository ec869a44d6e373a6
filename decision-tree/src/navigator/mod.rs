//! Navigator: the session state machine over a decision graph.
//!
//! [`DecisionTreeNavigator`] owns a [`Session`] (current node + history) and
//! exposes navigate / back / jump_to / reset. [`BreadcrumbTrail`] and
//! [`NavigatorView`] are pure projections of the session for rendering.

mod breadcrumb;
mod config;
mod decision_tree_navigator;
mod session;
mod view;

pub use breadcrumb::{Breadcrumb, BreadcrumbTrail, DEFAULT_BREADCRUMB_WINDOW};
pub use config::NavigatorConfig;
pub use decision_tree_navigator::DecisionTreeNavigator;
pub use session::Session;
pub use view::NavigatorView;

//! Renders the navigator view as plain text.

use std::io::{self, Write};

use decision_tree::{DecisionTreeNavigator, NodeLookup};

pub const HELP: &str =
    "Commands: <n> choose option, b back, j <i> jump to breadcrumb [i], r restart, h help, q quit";

/// Writes the current node, the breadcrumb trail and the available actions.
///
/// A terminal node shows only the restart affordance; `b` is listed only when
/// going back is legal.
pub fn render<G: NodeLookup, W: Write>(
    navigator: &DecisionTreeNavigator<G>,
    out: &mut W,
) -> io::Result<()> {
    let view = navigator.view();
    let graph = navigator.graph();
    let title_of = |id: &str| {
        graph
            .lookup(id)
            .map(|n| n.title.clone())
            .unwrap_or_else(|| id.to_string())
    };

    writeln!(out)?;
    if !view.breadcrumbs.is_empty() || view.breadcrumbs.hidden > 0 {
        let mut trail: Vec<String> = Vec::with_capacity(view.breadcrumbs.len() + 2);
        if view.breadcrumbs.hidden > 0 {
            trail.push("...".to_string());
        }
        for crumb in &view.breadcrumbs.entries {
            trail.push(format!("[{}] {}", crumb.history_index, title_of(&crumb.node_id)));
        }
        trail.push(title_of(&view.breadcrumbs.current));
        writeln!(out, "{}", trail.join(" > "))?;
    }

    writeln!(out, "== {} ({}) ==", view.current.title, view.current.kind)?;
    if !view.current.body.is_empty() {
        writeln!(out, "{}", view.current.body)?;
    }

    if view.is_terminal {
        writeln!(out, "  r) Start over")?;
    } else {
        for (i, option) in view.current.options.iter().enumerate() {
            writeln!(out, "  {}) {}", i + 1, option.label)?;
        }
    }
    if view.can_go_back {
        writeln!(out, "  b) Back")?;
    }
    Ok(())
}

//! Property-based tests for the navigator using proptest.
//!
//! Random operation sequences run against a graph with a reachable cycle. After
//! every step the session must satisfy:
//!
//! - start appears in history only as history[0]
//! - |history| equals forward navigations minus back steps since the last reset
//! - the path history ++ [current] is walkable through options from start
//! - a failed operation leaves the session unchanged

use decision_tree::{DecisionGraph, DecisionTreeNavigator, NavigationError, Session};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::common::cyclic_graph;

#[derive(Debug, Clone)]
enum Op {
    /// Follow the option at this position (modulo option count).
    Choose(usize),
    /// Navigate to an id that is not in the graph.
    Missing,
    Back,
    /// Jump to the path position selected by this value (modulo path length).
    Jump(usize),
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..4).prop_map(Op::Choose),
        1 => Just(Op::Missing),
        2 => Just(Op::Back),
        1 => (0usize..32).prop_map(Op::Jump),
        1 => Just(Op::Reset),
    ]
}

fn check_invariants(
    graph: &DecisionGraph,
    session: &Session,
    expected_depth: usize,
) -> Result<(), TestCaseError> {
    let history = session.history();
    prop_assert_eq!(history.len(), expected_depth);
    prop_assert_eq!(history.is_empty(), session.current() == "start");
    if let Some(first) = history.first() {
        prop_assert_eq!(first.as_str(), "start");
    }
    prop_assert!(
        history.iter().skip(1).all(|id| id != "start"),
        "start appears past history[0]: {:?}",
        history
    );
    let path: Vec<&str> = session.path().collect();
    for pair in path.windows(2) {
        prop_assert!(
            graph.has_edge(pair[0], pair[1]),
            "path step {} -> {} is not an option",
            pair[0],
            pair[1]
        );
    }
    Ok(())
}

fn apply(
    nav: &mut DecisionTreeNavigator,
    op: &Op,
    depth: &mut usize,
) -> Result<(), TestCaseError> {
    let before = nav.session().clone();
    match op {
        Op::Choose(i) => {
            let node = nav.current_node();
            if node.is_terminal() {
                return Ok(());
            }
            let target = node.options[i % node.options.len()].target.clone();
            prop_assert!(nav.navigate(&target).is_ok());
            *depth += 1;
            prop_assert_eq!(nav.current_id(), target.as_str());
            let previous = before.current().to_string();
            prop_assert_eq!(nav.history().last(), Some(&previous));
        }
        Op::Missing => {
            prop_assert_eq!(
                nav.navigate("missing"),
                Err(NavigationError::NodeNotFound("missing".into()))
            );
            prop_assert_eq!(nav.session(), &before);
        }
        Op::Back => {
            if *depth == 0 {
                prop_assert_eq!(nav.back(), Err(NavigationError::AtStart));
                prop_assert_eq!(nav.session(), &before);
            } else {
                prop_assert!(nav.back().is_ok());
                *depth -= 1;
                let h = before.history();
                prop_assert_eq!(nav.current_id(), h[h.len() - 1].as_str());
                prop_assert_eq!(nav.history(), &h[..h.len() - 1]);
            }
        }
        Op::Jump(sel) => {
            let j = sel % (*depth + 1);
            let target = before.node_at(j).map(str::to_string);
            prop_assert!(target.is_some());
            let target = target.unwrap_or_default();
            prop_assert!(nav.jump_to(&target, j).is_ok());
            *depth = j;
            prop_assert_eq!(nav.current_id(), target.as_str());
            prop_assert_eq!(nav.history(), &before.history()[..j]);
        }
        Op::Reset => {
            nav.reset();
            *depth = 0;
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Session invariants hold after every step of a random operation sequence.
    #[test]
    fn invariants_hold_under_random_operations(ops in prop::collection::vec(op(), 0..64)) {
        let graph = cyclic_graph();
        let mut nav = DecisionTreeNavigator::new(graph.clone()).unwrap();
        let mut depth = 0usize;
        check_invariants(&graph, nav.session(), depth)?;
        for op in &ops {
            apply(&mut nav, op, &mut depth)?;
            check_invariants(&graph, nav.session(), depth)?;
        }
    }

    /// back() immediately after any legal navigate restores the prior session.
    #[test]
    fn navigate_then_back_restores_state(
        prefix in prop::collection::vec(0usize..4, 0..24),
        pick in 0usize..4,
    ) {
        let mut nav = DecisionTreeNavigator::new(cyclic_graph()).unwrap();
        for i in prefix {
            let node = nav.current_node();
            if node.is_terminal() {
                break;
            }
            let target = node.options[i % node.options.len()].target.clone();
            nav.navigate(&target).unwrap();
        }
        let node = nav.current_node();
        if !node.is_terminal() {
            let target = node.options[pick % node.options.len()].target.clone();
            let before = nav.session().clone();
            nav.navigate(&target).unwrap();
            nav.back().unwrap();
            prop_assert_eq!(nav.session(), &before);
        }
    }

    /// jump_to(start, 0) and reset() converge from any reachable state.
    #[test]
    fn jump_to_start_matches_reset(prefix in prop::collection::vec(0usize..4, 0..24)) {
        let mut a = DecisionTreeNavigator::new(cyclic_graph()).unwrap();
        let mut b = DecisionTreeNavigator::new(cyclic_graph()).unwrap();
        for i in prefix {
            let node = a.current_node();
            if node.is_terminal() {
                break;
            }
            let target = node.options[i % node.options.len()].target.clone();
            a.navigate(&target).unwrap();
            b.navigate(&target).unwrap();
        }
        a.jump_to("start", 0).unwrap();
        b.reset();
        prop_assert_eq!(a.session(), b.session());
    }
}

//! Concrete walks and the navigate/back/jump_to/reset laws.

use decision_tree::DecisionTreeNavigator;

use crate::common::{deep_navigator, scenario_graph, walk};

fn history(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// **Scenario**: start -> A -> C, back, jump to start; each step yields the documented state.
///
/// Given: graph start -> [A, B], A -> [C], C -> [], B -> []
/// When: navigate(A), navigate(C), back(), jump_to(start, 0)
/// Then: (A,[start]), (C,[start,A]), (A,[start]), (start,[]) equal to a fresh reset
#[test]
fn concrete_walk_matches_expected_states() {
    let mut nav = DecisionTreeNavigator::new(scenario_graph()).unwrap();

    nav.navigate("a").unwrap();
    assert_eq!(nav.current_id(), "a");
    assert_eq!(nav.history(), history(&["start"]).as_slice());

    nav.navigate("c").unwrap();
    assert_eq!(nav.current_id(), "c");
    assert_eq!(nav.history(), history(&["start", "a"]).as_slice());

    nav.back().unwrap();
    assert_eq!(nav.current_id(), "a");
    assert_eq!(nav.history(), history(&["start"]).as_slice());

    nav.jump_to("start", 0).unwrap();
    let jumped = nav.session().clone();

    let mut fresh = DecisionTreeNavigator::new(scenario_graph()).unwrap();
    fresh.reset();
    assert_eq!(&jumped, fresh.session());
    assert_eq!(jumped.current(), "start");
    assert!(jumped.history().is_empty());
}

/// **Scenario**: back immediately after navigate restores the exact prior session.
#[test]
fn navigate_then_back_is_identity() {
    let mut nav = DecisionTreeNavigator::new(scenario_graph()).unwrap();
    nav.navigate("a").unwrap();
    let before = nav.session().clone();
    nav.navigate("c").unwrap();
    nav.back().unwrap();
    assert_eq!(nav.session(), &before);
}

/// **Scenario**: reset twice equals reset once, from any state.
#[test]
fn reset_is_idempotent() {
    let mut nav = DecisionTreeNavigator::new(scenario_graph()).unwrap();
    walk(&mut nav, &["a", "c"]);
    nav.reset();
    let once = nav.session().clone();
    nav.reset();
    assert_eq!(nav.session(), &once);
    assert_eq!(once.current(), "start");
    assert!(once.history().is_empty());
}

/// **Scenario**: jumping to the most recent breadcrumb equals a single back().
#[test]
fn jump_to_latest_breadcrumb_equals_single_back() {
    let mut by_jump = deep_navigator(4);
    let mut by_back = deep_navigator(4);

    let last = by_jump.history().len() - 1;
    let target = by_jump.history()[last].clone();
    by_jump.jump_to(&target, last).unwrap();
    by_back.back().unwrap();

    assert_eq!(by_jump.session(), by_back.session());
}

/// **Scenario**: jump_to(history[j], j) equals back() repeated h - j times, for every j.
#[test]
fn jump_to_equals_repeated_back_for_every_index() {
    let h = deep_navigator(7).history().len();
    for j in 0..=h {
        let mut by_jump = deep_navigator(7);
        let mut by_back = deep_navigator(7);

        let target = by_jump
            .session()
            .node_at(j)
            .expect("index within path")
            .to_string();
        by_jump.jump_to(&target, j).unwrap();
        for _ in 0..(h - j) {
            by_back.back().unwrap();
        }
        assert_eq!(by_jump.session(), by_back.session(), "mismatch at j={}", j);
    }
}

/// **Scenario**: jump_to(start, 0) and reset() converge from a deep state.
#[test]
fn jump_to_start_converges_with_reset() {
    let mut by_jump = deep_navigator(9);
    let mut by_reset = deep_navigator(9);
    by_jump.jump_to("start", 0).unwrap();
    by_reset.reset();
    assert_eq!(by_jump.session(), by_reset.session());
}

/// **Scenario**: |history| tracks forward navigations minus back steps.
#[test]
fn history_length_is_forward_minus_back() {
    let mut nav = deep_navigator(6);
    assert_eq!(nav.history().len(), 6);
    for m in 1..=6 {
        nav.back().unwrap();
        assert_eq!(nav.history().len(), 6 - m);
    }
    assert!(nav.is_at_start());
}

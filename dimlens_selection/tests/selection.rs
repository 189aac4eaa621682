// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `dimlens_selection` crate.
//!
//! These exercise `SelectionState` as a state machine: the dimension cap and its
//! advisory flag, the coupling between dimensions and filters, and selected-node
//! reconciliation against a filtered set.

use dimlens_filter::{CategoricalFilter, DatetimeFilter, Filter, NumericFilter};
use dimlens_selection::{FilterOutcome, MAX_DIMENSIONS, SelectionState, ToggleOutcome};

#[test]
fn empty_state_basics() {
    let state = SelectionState::new();
    assert!(state.dimensions().is_empty());
    assert_eq!(state.selected_node(), None);
    assert!(state.filters().is_empty());
    assert!(!state.is_blocked());
    assert_eq!(state.revision(), 0);
    assert_eq!(state.filter_revision(), 0);
}

#[test]
fn third_dimension_is_blocked_until_one_is_removed() {
    let mut state = SelectionState::new();
    assert_eq!(state.toggle_dimension("d1"), ToggleOutcome::Added);
    assert_eq!(state.toggle_dimension("d2"), ToggleOutcome::Added);

    let filter_rev = state.filter_revision();
    assert_eq!(state.toggle_dimension("d3"), ToggleOutcome::Blocked);
    assert_eq!(state.dimensions(), ["d1", "d2"]);
    assert!(state.is_blocked());
    assert_eq!(state.filter_revision(), filter_rev);

    assert_eq!(state.toggle_dimension("d1"), ToggleOutcome::Removed);
    assert_eq!(state.dimensions(), ["d2"]);
    assert!(!state.is_blocked());

    assert_eq!(state.toggle_dimension("d3"), ToggleOutcome::Added);
    assert_eq!(state.dimensions(), ["d2", "d3"]);
}

#[test]
fn selection_never_exceeds_the_cap() {
    let mut state = SelectionState::new();
    let ids = ["a", "b", "c", "a", "d", "b", "e", "c", "c", "f", "a"];
    for id in ids {
        state.toggle_dimension(id);
        assert!(state.dimensions().len() <= MAX_DIMENSIONS);
        let mut seen = state.dimensions().to_vec();
        seen.dedup();
        assert_eq!(seen.len(), state.dimensions().len());
    }
}

#[test]
fn blocked_flag_clears_on_successful_add() {
    let mut state = SelectionState::new();
    state.toggle_dimension("a");
    state.toggle_dimension("b");
    state.toggle_dimension("c");
    assert!(state.is_blocked());
    state.toggle_dimension("b");
    state.toggle_dimension("c");
    assert!(!state.is_blocked());
    assert_eq!(state.dimensions(), ["a", "c"]);
}

#[test]
fn deselecting_drops_the_filter() {
    let mut state = SelectionState::new();
    state.toggle_dimension("age");
    state.toggle_dimension("color");
    assert_eq!(
        state.set_filter("age", NumericFilter::at_least(25.0).into()),
        FilterOutcome::Applied
    );
    assert_eq!(
        state.set_filter("color", CategoricalFilter::new(["red"]).into()),
        FilterOutcome::Applied
    );

    state.toggle_dimension("age");
    assert!(state.filter("age").is_none());
    assert!(state.filter("color").is_some());
    for (id, _) in state.filters() {
        assert!(state.contains_dimension(id));
    }

    // Reselecting starts without a filter.
    state.toggle_dimension("age");
    assert!(state.filter("age").is_none());
}

#[test]
fn filters_require_a_selected_dimension() {
    let mut state = SelectionState::new();
    assert_eq!(
        state.set_filter("age", NumericFilter::at_least(1.0).into()),
        FilterOutcome::IgnoredNotSelected
    );
    assert!(state.filters().is_empty());
    assert_eq!(state.clear_filter("age"), FilterOutcome::IgnoredNotSelected);
}

#[test]
fn unconstrained_filter_is_a_clear() {
    let mut state = SelectionState::new();
    state.toggle_dimension("born");
    let start = dimlens_value::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let outcome = state.set_filter(
        "born",
        Filter::Datetime(DatetimeFilter {
            start: Some(start),
            end: None,
        }),
    );
    assert_eq!(outcome, FilterOutcome::Applied);

    let outcome = state.set_filter("born", Filter::Datetime(DatetimeFilter::default()));
    assert_eq!(outcome, FilterOutcome::Cleared);
    assert!(state.filters().is_empty());

    let rev = state.revision();
    assert_eq!(
        state.set_filter("born", Filter::Datetime(DatetimeFilter::default())),
        FilterOutcome::Unchanged
    );
    assert_eq!(state.clear_filter("born"), FilterOutcome::Unchanged);
    assert_eq!(state.revision(), rev);
}

#[test]
fn reconcile_moves_to_first_or_none() {
    let mut state = SelectionState::new();
    state.select_node(Some("b".to_owned()));

    // Selected node filtered out: move to the first remaining.
    assert!(state.reconcile_node(["c", "d"]));
    assert_eq!(state.selected_node(), Some("c"));

    // Empty filtered set: no selection.
    assert!(state.reconcile_node([]));
    assert_eq!(state.selected_node(), None);

    // Nodes reappear: the first becomes selected again.
    assert!(state.reconcile_node(["d", "c"]));
    assert_eq!(state.selected_node(), Some("d"));
}

#[test]
fn select_node_is_not_validated() {
    let mut state = SelectionState::new();
    state.select_node(Some("ghost".to_owned()));
    assert_eq!(state.selected_node(), Some("ghost"));
    state.select_node(None);
    assert_eq!(state.selected_node(), None);
}

#[test]
fn clear_filters_keeps_dimensions() {
    let mut state = SelectionState::new();
    state.toggle_dimension("a");
    state.set_filter("a", NumericFilter::at_most(3.0).into());
    state.clear_filters();
    assert!(state.filters().is_empty());
    assert_eq!(state.dimensions(), ["a"]);
}

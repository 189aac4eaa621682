// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dimlens_selection --heading-base-level=0

//! Dimlens Selection: the user-driven state of an explorer session.
//!
//! [`SelectionState`] tracks three related pieces of state:
//! - **Selected dimensions**: at most [`MAX_DIMENSIONS`] dimension ids, in the
//!   order they were selected. The first drives the X axis of a 2D view, the
//!   second the Y axis.
//! - **Filters**: at most one active [`Filter`] per selected dimension.
//! - **Selected node**: the node whose details are shown, if any.
//!
//! It also keeps two monotonically increasing counters: a **revision** bumped on
//! every semantic change, and a **filter revision** bumped only when the inputs
//! of filtering (selected dimensions or filters) change. Callers cache derived
//! data such as the filtered node set against these counters.
//!
//! The container enforces its own invariants:
//! - Selecting a third dimension is refused with [`ToggleOutcome::Blocked`]
//!   and raises an advisory flag that clears on the next successful toggle.
//! - Deselecting a dimension drops its filter.
//! - Filters can only be set for selected dimensions, and a filter that
//!   constrains nothing is stored as no filter at all.
//!
//! It does **not** know about nodes. After the filtered set changes, callers
//! hand its ids to [`SelectionState::reconcile_node`], which keeps the
//! selected node pointing at a visible node.
//!
//! ## Minimal example
//!
//! ```rust
//! use dimlens_filter::NumericFilter;
//! use dimlens_selection::{SelectionState, ToggleOutcome};
//!
//! let mut state = SelectionState::new();
//! assert_eq!(state.toggle_dimension("age"), ToggleOutcome::Added);
//! assert_eq!(state.toggle_dimension("height"), ToggleOutcome::Added);
//! assert_eq!(state.toggle_dimension("color"), ToggleOutcome::Blocked);
//! assert!(state.is_blocked());
//!
//! state.set_filter("age", NumericFilter::at_least(18.0).into());
//! assert!(state.filter("age").is_some());
//!
//! // Deselecting drops the filter and clears the advisory flag.
//! assert_eq!(state.toggle_dimension("age"), ToggleOutcome::Removed);
//! assert!(state.filter("age").is_none());
//! assert!(!state.is_blocked());
//! ```

mod state;

pub use state::{FilterOutcome, MAX_DIMENSIONS, SelectionState, ToggleOutcome};

pub use dimlens_filter::Filter;

// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dimlens_explorer --heading-base-level=0

//! Dimlens Explorer: a headless session over a node/dimension dataset.
//!
//! An [`Explorer`] owns a loaded [`Dataset`], the user's
//! [`SelectionState`](dimlens_selection::SelectionState), and an
//! [`ExplorerConfig`]. It is the only write path: every mutation goes through
//! it, and after each one it
//! 1. recomputes the filtered node set and the axes of the selected
//!    dimensions, memoized on the selection's filter revision, and
//! 2. moves the selected node back into the filtered set (or to none if the
//!    set is empty).
//!
//! Read accessors then describe what a display layer draws: the [`ViewMode`],
//! one [`AxisSlot`] per selected dimension, a 1D strip ([`OneDView`]) or a 2D
//! scatter plot ([`ScatterView`]) in pixel space, and [`NodeDetails`] for the
//! selected node.
//!
//! This crate emits [`tracing`] events but never installs a subscriber.
//!
//! ## Minimal example
//!
//! ```rust
//! use dimlens_explorer::{Explorer, ViewMode};
//! use dimlens_filter::NumericFilter;
//!
//! let mut explorer = Explorer::from_json_str(
//!     r#"{
//!         "nodes": [
//!             {"id": "a", "label": "A", "dimensions": {"age": 20}},
//!             {"id": "b", "label": "B", "dimensions": {"age": 30}},
//!             {"id": "c", "label": "C", "dimensions": {}}
//!         ],
//!         "dimensions": [{"id": "age", "name": "Age", "kind": "numeric"}]
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(explorer.selection().selected_node(), Some("a"));
//!
//! explorer.toggle_dimension("age");
//! assert_eq!(explorer.view_mode(), ViewMode::OneD);
//!
//! explorer.set_filter("age", NumericFilter::at_least(25.0).into());
//! let ids: Vec<&str> = explorer.filtered_nodes().map(|n| n.id.as_str()).collect();
//! assert_eq!(ids, ["b"]);
//! // The selected node followed the filter.
//! assert_eq!(explorer.selection().selected_node(), Some("b"));
//! ```

mod config;
mod dataset;
mod error;
mod explorer;
mod layout;
mod view;

pub use config::{DEFAULT_MISSING_DISPLAY, ExplorerConfig, PlotConfig};
pub use dataset::Dataset;
pub use error::{ConfigError, LoadError, LoadResult};
pub use explorer::{Derived, Explorer};
pub use layout::{
    OneDEntry, PlotFrame, ScatterPoint, TickMark, has_value, one_d_entries, scatter_points,
};
pub use view::{
    AxisSlot, DetailRow, NodeDetails, OneDView, ScatterView, THIRD_DIMENSION_NOTICE, ViewMode,
    display_value,
};

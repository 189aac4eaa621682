// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dimlens_filter --heading-base-level=0

//! Dimlens Filter: per-dimension filters and stable node filtering.
//!
//! A [`Filter`] is a closed sum with one variant per dimension kind:
//! - [`NumericFilter`]: inclusive `min`/`max` bounds, either side optional.
//! - [`DatetimeFilter`]: inclusive `start`/`end` calendar dates, either side optional.
//! - [`CategoricalFilter`]: a set of accepted display labels.
//!
//! [`matches`] decides whether one raw value passes one filter, and
//! [`filter_nodes`] reduces a node sequence to the nodes passing every filter
//! keyed to a currently selected dimension, preserving input order.
//!
//! Missing values fail closed: a value that cannot be coerced never satisfies
//! a set bound. Categorical filters see missing values as the
//! [`NO_VALUE_LABEL`](dimlens_value::NO_VALUE_LABEL) category, so they can be
//! included or excluded like any other label.
//!
//! ## Minimal example
//!
//! ```rust
//! use dimlens_filter::{Filter, FilterSet, NumericFilter, filter_nodes};
//! use dimlens_value::Node;
//!
//! let nodes = [
//!     Node::new("a", "A").with("age", 20.0),
//!     Node::new("b", "B").with("age", 30.0),
//!     Node::new("c", "C"),
//! ];
//!
//! let mut filters = FilterSet::new();
//! filters.insert("age", Filter::Numeric(NumericFilter::at_least(25.0)));
//!
//! let passing = filter_nodes(&nodes, &filters, &["age"]);
//! assert_eq!(passing.len(), 1);
//! assert_eq!(passing[0].id, "b");
//! ```
//!
//! ## Filter inputs
//!
//! Filter controls usually deliver raw text. [`NumericFilter::apply_min_input`]
//! and friends clear a bound on empty input and ignore text that does not parse,
//! keeping the previous bound.

mod engine;
mod filter;
mod options;
mod set;

pub use engine::{filter_indices, filter_nodes, matches, passes};
pub use filter::{CategoricalFilter, DatetimeFilter, Filter, NumericFilter};
pub use options::category_options;
pub use set::FilterSet;

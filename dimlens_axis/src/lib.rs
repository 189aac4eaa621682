// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dimlens_axis --heading-base-level=0

//! Dimlens Axis: headless normalization and tick primitives.
//!
//! An [`Axis`] is derived from the values a set of nodes holds for one
//! dimension. It pairs a normalizer, mapping any raw value onto `[0, 1]`, with
//! a short list of [`Tick`]s for display. Rendering is left to callers: an
//! axis knows nothing about pixels, fonts, or orientation.
//!
//! The axis shape depends on the dimension kind:
//! - **Numeric**: linear between the smallest and largest finite value, with
//!   ticks at the minimum, the midpoint, and the maximum.
//! - **Datetime**: the same, over millisecond timestamps, with `YYYY-MM-DD`
//!   tick labels.
//! - **Categorical**: evenly spaced distinct labels in case-insensitive order,
//!   one tick per category. Missing values form their own category.
//!
//! Degenerate inputs collapse to a constant axis that maps everything to `0.5`:
//! no usable values gives no ticks, a single distinct value gives one tick at
//! the center.
//!
//! ## Minimal example
//!
//! ```rust
//! use dimlens_axis::build_axis;
//! use dimlens_value::{Dimension, DimensionKind, Node, Value};
//!
//! let age = Dimension::new("age", "Age", DimensionKind::Numeric);
//! let nodes = [
//!     Node::new("a", "A").with("age", 20.0),
//!     Node::new("b", "B").with("age", 30.0),
//!     Node::new("c", "C"),
//! ];
//!
//! let axis = build_axis(&age, &nodes);
//! assert_eq!(axis.normalize(&Value::from(20.0)), 0.0);
//! assert_eq!(axis.normalize(&Value::from(25.0)), 0.5);
//! assert_eq!(axis.normalize(&Value::Missing), 0.5);
//!
//! let labels: Vec<&str> = axis.ticks().iter().map(|t| t.label.as_str()).collect();
//! assert_eq!(labels, ["20", "25", "30"]);
//! ```

mod axis;
mod build;

pub use axis::{Axis, NEUTRAL_POSITION, Scale, Tick};
pub use build::{build_axis, categorical_axis, datetime_axis, numeric_axis};

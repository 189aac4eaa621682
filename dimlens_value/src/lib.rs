// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dimlens_value --heading-base-level=0

//! Dimlens Value: typed dimensions, nodes, and total value coercion.
//!
//! This crate holds the data model shared by every other Dimlens crate:
//! - [`Dimension`]: a named attribute with a [`DimensionKind`] (numeric,
//!   datetime, or categorical).
//! - [`Node`]: a record with an id, a display label, and a mapping from
//!   dimension id to raw [`Value`].
//! - [`Value`]: a raw attribute value, which is a number, a string, or missing.
//!
//! On top of the model it provides the three coercions every consumer uses to
//! interpret a raw value according to a dimension kind:
//! - [`to_number`]: finite `f64` or `None`.
//! - [`to_timestamp`]: a millisecond UTC [`Timestamp`] or `None`.
//! - [`to_label`]: a display label, with [`NO_VALUE_LABEL`] standing in for
//!   missing values.
//!
//! All three are total: a value that cannot be interpreted degrades to
//! "missing" and is never reported as an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use dimlens_value::{NO_VALUE_LABEL, Value, to_label, to_number, to_timestamp};
//!
//! assert_eq!(to_number(&Value::from(" 42.5 ")), Some(42.5));
//! assert_eq!(to_number(&Value::from("forty")), None);
//!
//! let ts = to_timestamp(&Value::from("2024-03-01")).unwrap();
//! assert_eq!(ts.date_label(), "2024-03-01");
//!
//! assert_eq!(to_label(&Value::Missing), NO_VALUE_LABEL);
//! assert_eq!(to_label(&Value::from(" red ")), " red ");
//! ```
//!
//! ## Missing values
//!
//! An absent key, a JSON `null`, and an empty or whitespace-only string are
//! all the same thing: missing. [`Node::value`] returns [`Value::Missing`] for
//! absent keys so callers never need to distinguish the three.
//!
//! ## Date grammar
//!
//! [`to_timestamp`] accepts RFC 3339 date-times, naive `YYYY-MM-DDTHH:MM[:SS[.fff]]`
//! date-times (read as UTC, a space separator is also accepted), calendar dates
//! `YYYY-MM-DD` (UTC midnight), and finite numbers as milliseconds since the Unix
//! epoch. Nothing else parses.

mod coerce;
mod model;
mod timestamp;
mod value;

pub use coerce::{
    NO_VALUE_LABEL, compare_labels, distinct_labels, format_number, to_label, to_number,
    to_timestamp,
};
pub use model::{Dimension, DimensionKind, Node, UnknownDimensionKind};
pub use timestamp::Timestamp;
pub use value::Value;

pub use chrono::NaiveDate;

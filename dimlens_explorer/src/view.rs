// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_axis::Axis;
use dimlens_value::{Dimension, Value, format_number};

use crate::layout::{OneDEntry, ScatterPoint, TickMark};

/// Advisory shown after an attempt to select a third dimension.
pub const THIRD_DIMENSION_NOTICE: &str = "3D view not implemented - select at most two dimensions";

/// Which visualization the current selection calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// No dimension selected.
    Empty,
    /// One dimension selected: a strip of ordered nodes.
    OneD,
    /// Two dimensions selected: a scatter plot.
    TwoD,
}

impl ViewMode {
    /// Returns the mode for `count` selected dimensions.
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::OneD,
            _ => Self::TwoD,
        }
    }
}

/// A selected dimension as seen by the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisSlot<'a> {
    /// The dimension exists and its axis is built over the filtered nodes.
    Ready {
        /// Catalog entry.
        dimension: &'a Dimension,
        /// Axis over the filtered nodes.
        axis: &'a Axis,
    },
    /// The selected id has no catalog entry.
    Unavailable(&'a str),
}

impl<'a> AxisSlot<'a> {
    /// Returns the axis, if available.
    #[must_use]
    pub fn axis(&self) -> Option<&'a Axis> {
        match self {
            Self::Ready { axis, .. } => Some(axis),
            Self::Unavailable(_) => None,
        }
    }
}

/// One row of the node details panel.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRow<'a> {
    /// The dimension the row describes.
    pub dimension: &'a Dimension,
    /// Display text of the node's raw value.
    pub display: String,
}

/// Everything the details panel shows about a node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetails<'a> {
    /// Node id.
    pub id: &'a str,
    /// Node label.
    pub label: &'a str,
    /// One row per catalog dimension, in catalog order.
    pub rows: Vec<DetailRow<'a>>,
}

/// Renders a raw value for the details panel.
///
/// Only a value that is absent altogether uses `missing`; text is shown as is.
#[must_use]
pub fn display_value(value: &Value, missing: &str) -> String {
    match value {
        Value::Number(n) => format_number(*n),
        Value::Text(s) => s.clone(),
        Value::Missing => missing.to_owned(),
    }
}

/// The 1D strip for a single selected dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct OneDView<'a> {
    /// The dimension along the strip.
    pub dimension: &'a Dimension,
    /// Tick marks in pixel space.
    pub ticks: Vec<TickMark>,
    /// Ordered entries.
    pub entries: Vec<OneDEntry<'a>>,
}

/// The scatter plot for two selected dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterView<'a> {
    /// Dimension along X, the first selected.
    pub x_dimension: &'a Dimension,
    /// Dimension along Y, the second selected.
    pub y_dimension: &'a Dimension,
    /// X tick marks in pixel space.
    pub x_ticks: Vec<TickMark>,
    /// Y tick marks in pixel space.
    pub y_ticks: Vec<TickMark>,
    /// Points in filtered-set order.
    pub points: Vec<ScatterPoint<'a>>,
}

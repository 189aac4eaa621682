// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_value::{DimensionKind, Timestamp, Value, to_label, to_number, to_timestamp};
use hashbrown::HashMap;

/// Normalized position used for missing values and degenerate axes.
pub const NEUTRAL_POSITION: f64 = 0.5;

/// A labeled mark at a normalized position along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Display text.
    pub label: String,
    /// Position in `[0, 1]`.
    pub position: f64,
}

impl Tick {
    /// Creates a tick.
    #[must_use]
    pub fn new(label: impl Into<String>, position: f64) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// The normalization rule of an [`Axis`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    /// Every value maps to [`NEUTRAL_POSITION`].
    Constant,
    /// Linear over `[min, max]`, with `min < max`.
    Numeric {
        /// Value mapped to `0`.
        min: f64,
        /// Value mapped to `1`.
        max: f64,
    },
    /// Linear over `[min, max]` timestamps, with `min < max`.
    Datetime {
        /// Instant mapped to `0`.
        min: Timestamp,
        /// Instant mapped to `1`.
        max: Timestamp,
    },
    /// Lookup of a display label's assigned position.
    Categorical {
        /// Position per label.
        positions: HashMap<String, f64>,
    },
}

/// Normalizer plus ticks for one dimension over one node set.
///
/// Built with [`build_axis`](crate::build_axis) or one of the kind-specific
/// builders.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    kind: DimensionKind,
    scale: Scale,
    ticks: Vec<Tick>,
}

impl Axis {
    pub(crate) fn new(kind: DimensionKind, scale: Scale, ticks: Vec<Tick>) -> Self {
        Self { kind, scale, ticks }
    }

    /// Returns the dimension kind this axis was built for.
    #[must_use]
    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    /// Returns the normalization rule.
    #[must_use]
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Returns the ticks in ascending position order.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Returns `true` if every value maps to [`NEUTRAL_POSITION`].
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self.scale, Scale::Constant)
    }

    /// Maps `value` into `[0, 1]`.
    ///
    /// Values that do not coerce to the axis kind, and labels the axis has no
    /// category for, map to [`NEUTRAL_POSITION`]. Values beyond the extent the
    /// axis was built from are clamped.
    #[must_use]
    pub fn normalize(&self, value: &Value) -> f64 {
        match &self.scale {
            Scale::Constant => NEUTRAL_POSITION,
            Scale::Numeric { min, max } => {
                to_number(value).map_or(NEUTRAL_POSITION, |v| unit(linear(v, *min, *max)))
            }
            Scale::Datetime { min, max } => to_timestamp(value).map_or(NEUTRAL_POSITION, |t| {
                let span = (i128::from(max.as_millis()) - i128::from(min.as_millis())) as f64;
                let offset = (i128::from(t.as_millis()) - i128::from(min.as_millis())) as f64;
                unit(offset / span)
            }),
            Scale::Categorical { positions } => positions
                .get(to_label(value).as_str())
                .copied()
                .unwrap_or(NEUTRAL_POSITION),
        }
    }
}

/// Position of `v` between `min` and `max`.
///
/// Extents wider than `f64::MAX` are measured in halves so the span stays finite.
fn linear(v: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_finite() {
        (v - min) / span
    } else {
        (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

fn unit(position: f64) -> f64 {
    if position.is_nan() {
        return NEUTRAL_POSITION;
    }
    position.clamp(0.0, 1.0)
}

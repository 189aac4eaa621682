// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_value::{
    Dimension, DimensionKind, Node, Timestamp, Value, distinct_labels, format_number, to_number,
    to_timestamp,
};
use hashbrown::HashMap;

use crate::{Axis, NEUTRAL_POSITION, Scale, Tick};

/// Builds the axis for `dimension` over the values `nodes` hold for it.
///
/// This dispatches on [`Dimension::kind`] to [`numeric_axis`],
/// [`datetime_axis`], or [`categorical_axis`].
pub fn build_axis<'a, I>(dimension: &Dimension, nodes: I) -> Axis
where
    I: IntoIterator<Item = &'a Node>,
{
    let values = nodes.into_iter().map(|node| node.value(&dimension.id));
    match dimension.kind {
        DimensionKind::Numeric => numeric_axis(values),
        DimensionKind::Datetime => datetime_axis(values),
        DimensionKind::Categorical => categorical_axis(values),
    }
}

/// Builds a linear axis over the finite numbers among `values`.
///
/// Ticks are the minimum, the midpoint (rounded to two decimals unless
/// integral), and the maximum.
pub fn numeric_axis<'a, I>(values: I) -> Axis
where
    I: IntoIterator<Item = &'a Value>,
{
    let extent = values
        .into_iter()
        .filter_map(to_number)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    let Some((min, max)) = extent else {
        return Axis::new(DimensionKind::Numeric, Scale::Constant, Vec::new());
    };
    if min == max {
        return Axis::new(
            DimensionKind::Numeric,
            Scale::Constant,
            vec![Tick::new(format_number(min), NEUTRAL_POSITION)],
        );
    }

    let ticks = vec![
        Tick::new(format_number(min), 0.0),
        Tick::new(format_number(tick_midpoint(min, max)), NEUTRAL_POSITION),
        Tick::new(format_number(max), 1.0),
    ];
    Axis::new(DimensionKind::Numeric, Scale::Numeric { min, max }, ticks)
}

/// Builds a linear axis over the timestamps among `values`.
///
/// Ticks are the calendar dates of the earliest instant, the midpoint, and
/// the latest instant.
pub fn datetime_axis<'a, I>(values: I) -> Axis
where
    I: IntoIterator<Item = &'a Value>,
{
    let extent = values.into_iter().filter_map(to_timestamp).fold(
        None,
        |acc: Option<(Timestamp, Timestamp)>, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        },
    );

    let Some((min, max)) = extent else {
        return Axis::new(DimensionKind::Datetime, Scale::Constant, Vec::new());
    };
    if min == max {
        return Axis::new(
            DimensionKind::Datetime,
            Scale::Constant,
            vec![Tick::new(min.date_label(), NEUTRAL_POSITION)],
        );
    }

    let ticks = vec![
        Tick::new(min.date_label(), 0.0),
        Tick::new(min.midpoint(max).date_label(), NEUTRAL_POSITION),
        Tick::new(max.date_label(), 1.0),
    ];
    Axis::new(DimensionKind::Datetime, Scale::Datetime { min, max }, ticks)
}

/// Builds an evenly spaced axis over the distinct labels of `values`.
///
/// Categories are ordered case-insensitively; the `i`-th of `n` sits at
/// `i / (n - 1)`.
pub fn categorical_axis<'a, I>(values: I) -> Axis
where
    I: IntoIterator<Item = &'a Value>,
{
    let labels = distinct_labels(values);
    match labels.len() {
        0 => Axis::new(DimensionKind::Categorical, Scale::Constant, Vec::new()),
        1 => Axis::new(
            DimensionKind::Categorical,
            Scale::Constant,
            labels
                .into_iter()
                .map(|label| Tick::new(label, NEUTRAL_POSITION))
                .collect(),
        ),
        n => {
            let last = (n - 1) as f64;
            let mut positions = HashMap::with_capacity(n);
            let mut ticks = Vec::with_capacity(n);
            for (rank, label) in labels.into_iter().enumerate() {
                let position = rank as f64 / last;
                positions.insert(label.clone(), position);
                ticks.push(Tick::new(label, position));
            }
            Axis::new(
                DimensionKind::Categorical,
                Scale::Categorical { positions },
                ticks,
            )
        }
    }
}

fn tick_midpoint(min: f64, max: f64) -> f64 {
    let mid = min / 2.0 + max / 2.0;
    if mid.fract() == 0.0 {
        mid
    } else {
        (mid * 100.0).round() / 100.0
    }
}

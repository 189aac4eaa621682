// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel placement of the 1D strip and the 2D scatter plot.

use core::cmp::Ordering;

use dimlens_axis::Axis;
use dimlens_value::{DimensionKind, Node, Value, compare_labels, to_number, to_timestamp};
use kurbo::{Point, Rect};

/// Maps normalized `[0, 1]` positions into a padded drawing area.
///
/// The X axis grows rightwards from the left padding edge. The Y axis grows
/// upwards, so `0` sits on the bottom padding edge and `1` on the top one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    bounds: Rect,
    inner: Rect,
}

impl PlotFrame {
    /// Creates a frame of `width` by `height` with `padding` on every side.
    ///
    /// Padding is clamped per axis to half the extent, so an oversized
    /// padding collapses the drawing area onto the center line instead of
    /// mirroring positions.
    #[must_use]
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        let padding = padding.max(0.0);
        let pad_x = padding.min(width.max(0.0) / 2.0);
        let pad_y = padding.min(height.max(0.0) / 2.0);
        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            inner: Rect::new(pad_x, pad_y, width - pad_x, height - pad_y),
        }
    }

    /// Returns the outer bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the padded drawing area.
    #[must_use]
    pub fn inner(&self) -> Rect {
        self.inner
    }

    /// Horizontal pixel coordinate of a normalized position.
    #[must_use]
    pub fn x_for(&self, normalized: f64) -> f64 {
        self.inner.x0 + normalized * self.inner.width()
    }

    /// Vertical pixel coordinate of a normalized position.
    #[must_use]
    pub fn y_for(&self, normalized: f64) -> f64 {
        self.inner.y1 - normalized * self.inner.height()
    }

    /// Pixel point of a normalized `(x, y)` pair.
    #[must_use]
    pub fn point_for(&self, nx: f64, ny: f64) -> Point {
        Point::new(self.x_for(nx), self.y_for(ny))
    }

    /// Projects the ticks of `axis` onto the horizontal edge.
    #[must_use]
    pub fn x_ticks(&self, axis: &Axis) -> Vec<TickMark> {
        axis.ticks()
            .iter()
            .map(|t| TickMark {
                label: t.label.clone(),
                offset: self.x_for(t.position),
            })
            .collect()
    }

    /// Projects the ticks of `axis` onto the vertical edge.
    #[must_use]
    pub fn y_ticks(&self, axis: &Axis) -> Vec<TickMark> {
        axis.ticks()
            .iter()
            .map(|t| TickMark {
                label: t.label.clone(),
                offset: self.y_for(t.position),
            })
            .collect()
    }
}

/// An axis tick placed in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    /// Display text.
    pub label: String,
    /// Pixel coordinate along the axis the tick belongs to.
    pub offset: f64,
}

/// A node placed on the 1D strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneDEntry<'a> {
    /// The node.
    pub node: &'a Node,
    /// Position in `[0, 1]` along the axis.
    pub normalized: f64,
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Whether the node holds a value the axis understands.
    pub has_value: bool,
    /// Whether this is the selected node.
    pub selected: bool,
}

/// A node placed on the 2D scatter plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint<'a> {
    /// The node.
    pub node: &'a Node,
    /// Normalized `(x, y)` position, each in `[0, 1]`.
    pub normalized: (f64, f64),
    /// Pixel position.
    pub position: Point,
    /// Whether this is the selected node.
    pub selected: bool,
}

/// Returns `true` if `value` coerces for an axis of `kind`.
///
/// Every value has a categorical label, so only numeric and datetime values can
/// be absent.
#[must_use]
pub fn has_value(kind: DimensionKind, value: &Value) -> bool {
    match kind {
        DimensionKind::Numeric => to_number(value).is_some(),
        DimensionKind::Datetime => to_timestamp(value).is_some(),
        DimensionKind::Categorical => true,
    }
}

/// Orders `nodes` along the axis of `dimension_id`.
///
/// Nodes with a value come first, ascending by normalized position. Ties, and
/// the trailing nodes without a value, are ordered by label case-insensitively.
pub fn one_d_entries<'a, I>(
    nodes: I,
    dimension_id: &str,
    axis: &Axis,
    frame: &PlotFrame,
    selected: Option<&str>,
) -> Vec<OneDEntry<'a>>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut entries: Vec<OneDEntry<'a>> = nodes
        .into_iter()
        .map(|node| {
            let value = node.value(dimension_id);
            let normalized = axis.normalize(value);
            OneDEntry {
                node,
                normalized,
                x: frame.x_for(normalized),
                has_value: has_value(axis.kind(), value),
                selected: selected == Some(node.id.as_str()),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.has_value
            .cmp(&a.has_value)
            .then_with(|| {
                if a.has_value && b.has_value {
                    a.normalized.total_cmp(&b.normalized)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| compare_labels(&a.node.label, &b.node.label))
    });
    entries
}

/// Places `nodes` on the scatter plot spanned by the two given axes.
///
/// Points keep the order of `nodes`.
pub fn scatter_points<'a, I>(
    nodes: I,
    x: (&str, &Axis),
    y: (&str, &Axis),
    frame: &PlotFrame,
    selected: Option<&str>,
) -> Vec<ScatterPoint<'a>>
where
    I: IntoIterator<Item = &'a Node>,
{
    nodes
        .into_iter()
        .map(|node| {
            let nx = x.1.normalize(node.value(x.0));
            let ny = y.1.normalize(node.value(y.0));
            ScatterPoint {
                node,
                normalized: (nx, ny),
                position: frame.point_for(nx, ny),
                selected: selected == Some(node.id.as_str()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimlens_axis::{categorical_axis, numeric_axis};

    #[test]
    fn frame_maps_corners() {
        let frame = PlotFrame::new(600.0, 400.0, 40.0);
        assert_eq!(frame.point_for(0.0, 0.0), Point::new(40.0, 360.0));
        assert_eq!(frame.point_for(1.0, 1.0), Point::new(560.0, 40.0));
        assert_eq!(frame.point_for(0.5, 0.5), Point::new(300.0, 200.0));
    }

    #[test]
    fn inner_area_is_inset_from_bounds() {
        let frame = PlotFrame::new(600.0, 400.0, 40.0);
        assert_eq!(frame.bounds(), Rect::new(0.0, 0.0, 600.0, 400.0));
        assert_eq!(frame.inner(), Rect::new(40.0, 40.0, 560.0, 360.0));
    }

    #[test]
    fn oversized_padding_collapses_to_center() {
        let frame = PlotFrame::new(60.0, 40.0, 50.0);
        assert_eq!(frame.bounds(), Rect::new(0.0, 0.0, 60.0, 40.0));
        assert_eq!(frame.inner().width(), 0.0);
        assert_eq!(frame.inner().height(), 0.0);
        assert_eq!(frame.x_for(0.0), 30.0);
        assert_eq!(frame.x_for(0.7), 30.0);
        assert_eq!(frame.y_for(1.0), 20.0);

        // Only the axis that is too small collapses.
        let frame = PlotFrame::new(600.0, 40.0, 30.0);
        assert_eq!(frame.inner(), Rect::new(30.0, 20.0, 570.0, 20.0));
        assert!(frame.x_for(0.0) < frame.x_for(1.0));

        let frame = PlotFrame::new(100.0, 50.0, -5.0);
        assert_eq!(frame.inner(), frame.bounds());
    }

    #[test]
    fn ticks_are_projected() {
        let frame = PlotFrame::new(200.0, 100.0, 10.0);
        let axis = numeric_axis(&[Value::from(0.0), Value::from(10.0)]);
        let xs: Vec<f64> = frame.x_ticks(&axis).iter().map(|t| t.offset).collect();
        assert_eq!(xs, [10.0, 100.0, 190.0]);
        let ys: Vec<f64> = frame.y_ticks(&axis).iter().map(|t| t.offset).collect();
        assert_eq!(ys, [90.0, 50.0, 10.0]);
    }

    #[test]
    fn one_d_orders_by_value_then_label() {
        let nodes = [
            Node::new("a", "zeta").with("n", 2.0),
            Node::new("b", "Alpha"),
            Node::new("c", "beta").with("n", 1.0),
            Node::new("d", "alpha").with("n", 2.0),
            Node::new("e", "Aardvark").with("n", "oops"),
        ];
        let axis = numeric_axis(nodes.iter().map(|n| n.value("n")));
        let frame = PlotFrame::new(100.0, 50.0, 0.0);
        let entries = one_d_entries(&nodes, "n", &axis, &frame, Some("d"));
        let ids: Vec<&str> = entries.iter().map(|e| e.node.id.as_str()).collect();
        assert_eq!(ids, ["c", "d", "a", "e", "b"]);
        assert_eq!(entries[0].x, 0.0);
        assert_eq!(entries[1].x, 100.0);
        assert!(entries[1].selected);
        assert!(!entries[3].has_value);
        assert_eq!(entries[3].normalized, 0.5);
    }

    #[test]
    fn scatter_uses_both_axes() {
        let nodes = [
            Node::new("a", "A").with("x", 0.0).with("c", "red"),
            Node::new("b", "B").with("x", 4.0).with("c", "blue"),
        ];
        let x_axis = numeric_axis(nodes.iter().map(|n| n.value("x")));
        let y_axis = categorical_axis(nodes.iter().map(|n| n.value("c")));
        let frame = PlotFrame::new(600.0, 400.0, 40.0);
        let points = scatter_points(&nodes, ("x", &x_axis), ("c", &y_axis), &frame, None);
        assert_eq!(points[0].normalized, (0.0, 1.0));
        assert_eq!(points[0].position, Point::new(40.0, 40.0));
        assert_eq!(points[1].position, Point::new(560.0, 360.0));
        assert!(points.iter().all(|p| !p.selected));
    }
}

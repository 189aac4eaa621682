// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_value::{Node, Value};

use crate::{Filter, FilterSet};

/// Returns `true` if `value` passes `filter`.
///
/// Same as [`Filter::matches`]; provided as a free function for symmetry with
/// [`filter_nodes`].
#[must_use]
pub fn matches(value: &Value, filter: &Filter) -> bool {
    filter.matches(value)
}

/// Returns `true` if `node` passes every filter keyed to a selected dimension.
///
/// Filters for dimensions outside `selected` are ignored. Selected
/// dimensions without a filter impose no constraint.
#[must_use]
pub fn passes<S: AsRef<str>>(node: &Node, filters: &FilterSet, selected: &[S]) -> bool {
    if filters.is_empty() {
        return true;
    }
    selected.iter().all(|dimension_id| {
        let dimension_id = dimension_id.as_ref();
        filters
            .get(dimension_id)
            .is_none_or(|filter| filter.matches(node.value(dimension_id)))
    })
}

/// Returns the nodes passing every active filter, in input order.
///
/// See [`passes`] for the per-node rule.
pub fn filter_nodes<'a, I, S>(nodes: I, filters: &FilterSet, selected: &[S]) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
    S: AsRef<str>,
{
    nodes
        .into_iter()
        .filter(|node| passes(node, filters, selected))
        .collect()
}

/// Returns the indices of the nodes passing every active filter, ascending.
///
/// This is [`filter_nodes`] for callers that keep the node slice and want a
/// compact result to cache.
#[must_use]
pub fn filter_indices<S: AsRef<str>>(nodes: &[Node], filters: &FilterSet, selected: &[S]) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| passes(node, filters, selected))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CategoricalFilter, NumericFilter};

    fn people() -> Vec<Node> {
        vec![
            Node::new("a", "A").with("age", 20.0).with("color", "red"),
            Node::new("b", "B").with("age", 30.0).with("color", "blue"),
            Node::new("c", "C").with("color", "red"),
        ]
    }

    fn ids(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn missing_value_fails_a_set_bound() {
        let nodes = people();
        let mut filters = FilterSet::new();
        filters.insert("age", NumericFilter::at_least(25.0).into());
        assert_eq!(ids(&filter_nodes(&nodes, &filters, &["age"])), ["b"]);
    }

    #[test]
    fn filters_on_unselected_dimensions_are_ignored() {
        let nodes = people();
        let mut filters = FilterSet::new();
        filters.insert("age", NumericFilter::at_least(25.0).into());
        assert_eq!(filter_nodes(&nodes, &filters, &["color"]).len(), 3);
        assert_eq!(filter_nodes(&nodes, &filters, &[] as &[&str]).len(), 3);
    }

    #[test]
    fn all_selected_filters_must_pass() {
        let nodes = people();
        let mut filters = FilterSet::new();
        filters.insert("age", NumericFilter::at_most(25.0).into());
        filters.insert("color", CategoricalFilter::new(["red"]).into());
        assert_eq!(ids(&filter_nodes(&nodes, &filters, &["color", "age"])), ["a"]);
        assert_eq!(ids(&filter_nodes(&nodes, &filters, &["color"])), ["a", "c"]);
    }

    #[test]
    fn indices_match_nodes() {
        let nodes = people();
        let mut filters = FilterSet::new();
        filters.insert("color", CategoricalFilter::new(["red"]).into());
        assert_eq!(filter_indices(&nodes, &filters, &["color"]), [0, 2]);
    }
}

// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_value::{Node, distinct_labels};

/// Lists the distinct labels of `dimension_id` across `nodes`.
///
/// Labels are ordered like categorical axis ticks and include
/// [`NO_VALUE_LABEL`](dimlens_value::NO_VALUE_LABEL) when any node lacks a
/// value. This is the option list for a categorical filter picker.
pub fn category_options<'a, I>(nodes: I, dimension_id: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Node>,
{
    distinct_labels(nodes.into_iter().map(|node| node.value(dimension_id)))
}

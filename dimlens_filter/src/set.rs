// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::Filter;

/// Active filters keyed by dimension id.
///
/// A `FilterSet` only ever holds constraining filters: inserting an
/// unconstrained filter removes the entry instead. Iteration is ordered by
/// dimension id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSet {
    filters: BTreeMap<String, Filter>,
}

impl FilterSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filters: BTreeMap::new(),
        }
    }

    /// Returns `true` if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of active filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns the filter for `dimension_id`, if any.
    #[must_use]
    pub fn get(&self, dimension_id: &str) -> Option<&Filter> {
        self.filters.get(dimension_id)
    }

    /// Returns `true` if a filter is active for `dimension_id`.
    #[must_use]
    pub fn contains(&self, dimension_id: &str) -> bool {
        self.filters.contains_key(dimension_id)
    }

    /// Sets the filter for `dimension_id`.
    ///
    /// An unconstrained filter clears the entry. Returns `true` if the set
    /// changed.
    pub fn insert(&mut self, dimension_id: impl Into<String>, filter: Filter) -> bool {
        let dimension_id = dimension_id.into();
        if filter.is_unconstrained() {
            return self.remove(&dimension_id);
        }
        match self.filters.get(&dimension_id) {
            Some(existing) if *existing == filter => false,
            _ => {
                self.filters.insert(dimension_id, filter);
                true
            }
        }
    }

    /// Removes the filter for `dimension_id`. Returns `true` if one was active.
    pub fn remove(&mut self, dimension_id: &str) -> bool {
        self.filters.remove(dimension_id).is_some()
    }

    /// Drops every filter whose dimension is not accepted by `keep`.
    ///
    /// Returns `true` if anything was removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> bool {
        let before = self.filters.len();
        self.filters.retain(|id, _| keep(id));
        self.filters.len() != before
    }

    /// Iterates over `(dimension id, filter)` pairs in id order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Filter> {
        self.filters.iter()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = (&'a String, &'a Filter);
    type IntoIter = btree_map::Iter<'a, String, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

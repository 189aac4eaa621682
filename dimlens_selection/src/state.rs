// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_filter::{Filter, FilterSet};
use smallvec::SmallVec;

/// Maximum number of simultaneously selected dimensions.
pub const MAX_DIMENSIONS: usize = 2;

/// Result of [`SelectionState::toggle_dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The dimension was appended to the selection.
    Added,
    /// The dimension was deselected and its filter dropped.
    Removed,
    /// The selection was already full; nothing changed except the advisory flag.
    Blocked,
}

/// Result of a filter mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    /// A constraining filter is now stored.
    Applied,
    /// The filter entry was removed.
    Cleared,
    /// The request matched the current state.
    Unchanged,
    /// The dimension is not selected; nothing was stored.
    IgnoredNotSelected,
    /// The filter kind does not match the dimension kind; nothing was stored.
    ///
    /// [`SelectionState`] never returns this itself since it does not know
    /// dimension kinds; controllers that do report it.
    IgnoredKindMismatch,
    /// The dimension is not in the catalog; nothing was stored.
    ///
    /// Like [`Self::IgnoredKindMismatch`], only controllers that know the
    /// catalog report it.
    IgnoredUnknownDimension,
}

impl FilterOutcome {
    /// Returns `true` if the state changed.
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, Self::Applied | Self::Cleared)
    }
}

/// Selected dimensions, active filters, and the selected node.
///
/// See the crate documentation for the invariants this type maintains.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    dimensions: SmallVec<[String; MAX_DIMENSIONS]>,
    node: Option<String>,
    filters: FilterSet,
    blocked: bool,
    revision: u64,
    filter_revision: u64,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected dimension ids in selection order.
    #[must_use]
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Returns `true` if `dimension_id` is selected.
    #[must_use]
    pub fn contains_dimension(&self, dimension_id: &str) -> bool {
        self.position_of(dimension_id).is_some()
    }

    /// Returns the selected node id, if any.
    #[must_use]
    pub fn selected_node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Returns the active filters.
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Returns the active filter for `dimension_id`, if any.
    #[must_use]
    pub fn filter(&self, dimension_id: &str) -> Option<&Filter> {
        self.filters.get(dimension_id)
    }

    /// Returns `true` if the last toggle was refused because the selection was full.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Returns the revision counter.
    ///
    /// It is bumped only when a mutation changes observable state: dimensions,
    /// filters, the selected node, or the advisory flag. No-op calls leave it
    /// unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the filter revision counter.
    ///
    /// It is bumped only when the selected dimensions or the filters change,
    /// which are the only inputs of filtering besides the nodes themselves.
    #[must_use]
    pub fn filter_revision(&self) -> u64 {
        self.filter_revision
    }

    /// Toggles `dimension_id` in the selection.
    ///
    /// - A selected dimension is removed along with its filter.
    /// - An unselected dimension is appended if fewer than [`MAX_DIMENSIONS`]
    ///   are selected.
    /// - Otherwise nothing changes and the advisory flag is raised.
    ///
    /// Successful toggles clear the advisory flag.
    pub fn toggle_dimension(&mut self, dimension_id: &str) -> ToggleOutcome {
        if let Some(idx) = self.position_of(dimension_id) {
            self.dimensions.remove(idx);
            self.filters.remove(dimension_id);
            self.blocked = false;
            self.bump_filter_revision();
            return ToggleOutcome::Removed;
        }

        if self.dimensions.len() >= MAX_DIMENSIONS {
            if !self.blocked {
                self.blocked = true;
                self.bump_revision();
            }
            return ToggleOutcome::Blocked;
        }

        self.dimensions.push(dimension_id.to_owned());
        self.blocked = false;
        self.bump_filter_revision();
        ToggleOutcome::Added
    }

    /// Sets the filter for a selected dimension.
    ///
    /// An unconstrained filter clears the entry instead of being stored.
    /// Filters for unselected dimensions are ignored.
    pub fn set_filter(&mut self, dimension_id: &str, filter: Filter) -> FilterOutcome {
        if !self.contains_dimension(dimension_id) {
            return FilterOutcome::IgnoredNotSelected;
        }
        let clearing = filter.is_unconstrained();
        if !self.filters.insert(dimension_id, filter) {
            return FilterOutcome::Unchanged;
        }
        self.bump_filter_revision();
        if clearing {
            FilterOutcome::Cleared
        } else {
            FilterOutcome::Applied
        }
    }

    /// Removes the filter for `dimension_id`.
    pub fn clear_filter(&mut self, dimension_id: &str) -> FilterOutcome {
        if !self.contains_dimension(dimension_id) {
            return FilterOutcome::IgnoredNotSelected;
        }
        if self.filters.remove(dimension_id) {
            self.bump_filter_revision();
            FilterOutcome::Cleared
        } else {
            FilterOutcome::Unchanged
        }
    }

    /// Removes every filter while keeping the selected dimensions.
    pub fn clear_filters(&mut self) {
        if self.filters.retain(|_| false) {
            self.bump_filter_revision();
        }
    }

    /// Sets the selected node without validating it.
    ///
    /// Validity against the filtered set is restored by
    /// [`Self::reconcile_node`].
    pub fn select_node(&mut self, node_id: Option<String>) {
        if self.node == node_id {
            return;
        }
        self.node = node_id;
        self.bump_revision();
    }

    /// Re-points the selected node at a member of the filtered set.
    ///
    /// `filtered_ids` are the ids of the filtered nodes in display order.
    /// - If the set is empty, the selection becomes `None`.
    /// - If the current selection is absent from the set (or `None`), it
    ///   becomes the first id of the set.
    ///
    /// Returns `true` if the selected node changed.
    pub fn reconcile_node<'a, I>(&mut self, filtered_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut first = None;
        for id in filtered_ids {
            if self.node.as_deref() == Some(id) {
                return false;
            }
            first.get_or_insert(id);
        }

        let next = first.map(str::to_owned);
        if self.node == next {
            return false;
        }
        self.node = next;
        self.bump_revision();
        true
    }

    /// Clears the advisory flag without touching the selection.
    pub fn dismiss_blocked(&mut self) {
        if self.blocked {
            self.blocked = false;
            self.bump_revision();
        }
    }

    fn position_of(&self, dimension_id: &str) -> Option<usize> {
        self.dimensions.iter().position(|id| id == dimension_id)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn bump_filter_revision(&mut self) {
        self.filter_revision = self.filter_revision.wrapping_add(1);
        self.bump_revision();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimlens_filter::NumericFilter;

    #[test]
    fn revisions_track_filter_inputs_separately() {
        let mut state = SelectionState::new();
        state.toggle_dimension("a");
        let (rev, filter_rev) = (state.revision(), state.filter_revision());

        state.select_node(Some("n1".to_owned()));
        assert!(state.revision() > rev);
        assert_eq!(state.filter_revision(), filter_rev);

        state.set_filter("a", NumericFilter::at_most(1.0).into());
        assert!(state.filter_revision() > filter_rev);
    }

    #[test]
    fn repeated_blocked_toggle_bumps_once() {
        let mut state = SelectionState::new();
        state.toggle_dimension("a");
        state.toggle_dimension("b");
        state.toggle_dimension("c");
        let rev = state.revision();
        assert_eq!(state.toggle_dimension("d"), ToggleOutcome::Blocked);
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn reconcile_keeps_a_member() {
        let mut state = SelectionState::new();
        state.select_node(Some("b".to_owned()));
        let rev = state.revision();
        assert!(!state.reconcile_node(["a", "b"]));
        assert_eq!(state.selected_node(), Some("b"));
        assert_eq!(state.revision(), rev);
    }
}

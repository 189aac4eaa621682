// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_axis::{Axis, build_axis};
use dimlens_filter::{Filter, category_options, filter_indices};
use dimlens_selection::{FilterOutcome, SelectionState, ToggleOutcome};
use dimlens_value::Node;
use tracing::{debug, warn};

use crate::config::ExplorerConfig;
use crate::dataset::Dataset;
use crate::error::LoadResult;
use crate::layout::{one_d_entries, scatter_points};
use crate::view::{
    AxisSlot, DetailRow, NodeDetails, OneDView, ScatterView, THIRD_DIMENSION_NOTICE, ViewMode,
    display_value,
};

/// Data derived from the dataset and the filter inputs of the selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Derived {
    /// Indices into [`Dataset::nodes`] of the nodes passing every active filter,
    /// in dataset order.
    pub filtered: Vec<usize>,
    /// Axes over the filtered nodes, one per selected dimension present in the
    /// catalog, in selection order.
    pub axes: Vec<(String, Axis)>,
}

impl Derived {
    fn compute(dataset: &Dataset, selection: &SelectionState) -> Self {
        let filtered = filter_indices(dataset.nodes(), selection.filters(), selection.dimensions());
        let nodes: Vec<&Node> = filtered.iter().map(|&i| &dataset.nodes()[i]).collect();
        let axes = selection
            .dimensions()
            .iter()
            .filter_map(|id| {
                let Some(dimension) = dataset.dimension(id) else {
                    warn!(dimension = %id, "selected dimension is not in the catalog");
                    return None;
                };
                Some((id.clone(), build_axis(dimension, nodes.iter().copied())))
            })
            .collect();
        Self { filtered, axes }
    }
}

/// A single explorer session over one dataset.
///
/// The explorer owns the [`SelectionState`] and is its only writer. After
/// every mutation it refreshes the derived data and moves the selected node
/// back into the filtered set, so every read accessor observes a consistent
/// state.
#[derive(Clone, Debug)]
pub struct Explorer {
    dataset: Dataset,
    config: ExplorerConfig,
    selection: SelectionState,
    derived: Derived,
    derived_at: Option<u64>,
}

impl Explorer {
    /// Starts a session over `dataset` with the default configuration.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self::with_config(dataset, ExplorerConfig::default())
    }

    /// Starts a session over `dataset`.
    ///
    /// The first node, if any, is selected. `config` is taken as is; only
    /// [`ExplorerConfig::from_json_str`] validates the plot geometry, and a
    /// padding larger than half the plot collapses the drawing area of the
    /// [`PlotFrame`](crate::PlotFrame) instead of inverting it.
    #[must_use]
    pub fn with_config(dataset: Dataset, config: ExplorerConfig) -> Self {
        let mut explorer = Self {
            dataset,
            config,
            selection: SelectionState::new(),
            derived: Derived::default(),
            derived_at: None,
        };
        explorer.refresh();
        explorer
    }

    /// Parses a data document and starts a session over it.
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        Dataset::from_json_str(json).map(Self::new)
    }

    /// Replaces the dataset, keeping the selection where it still applies.
    ///
    /// The previously selected node stays selected if it is still visible;
    /// otherwise the first visible node is.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.derived_at = None;
        self.refresh();
    }

    /// Returns the dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Returns the selection, read-only.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Toggles a dimension in the selection.
    pub fn toggle_dimension(&mut self, dimension_id: &str) -> ToggleOutcome {
        let outcome = self.selection.toggle_dimension(dimension_id);
        match outcome {
            ToggleOutcome::Blocked => {
                warn!(dimension = %dimension_id, "selection full, toggle blocked");
            }
            _ => debug!(dimension = %dimension_id, ?outcome, "dimension toggled"),
        }
        self.refresh();
        outcome
    }

    /// Sets the filter of a selected dimension.
    ///
    /// The dimension must be in the catalog and the filter of its kind.
    /// Unconstrained filters clear the entry.
    pub fn set_filter(&mut self, dimension_id: &str, filter: Filter) -> FilterOutcome {
        let outcome = match self.dataset.dimension(dimension_id) {
            None => {
                warn!(dimension = %dimension_id, "filter ignored, unknown dimension");
                FilterOutcome::IgnoredUnknownDimension
            }
            Some(dimension) if dimension.kind != filter.kind() => {
                warn!(
                    dimension = %dimension_id,
                    expected = %dimension.kind,
                    got = %filter.kind(),
                    "filter kind does not match dimension"
                );
                FilterOutcome::IgnoredKindMismatch
            }
            Some(_) => self.selection.set_filter(dimension_id, filter),
        };
        log_filter_outcome(dimension_id, outcome);
        self.refresh();
        outcome
    }

    /// Edits the filter of a selected dimension in place.
    ///
    /// `edit` receives the current filter, or an unconstrained one of the
    /// dimension's kind if there is none. The result is stored as with
    /// [`Self::set_filter`].
    pub fn edit_filter(
        &mut self,
        dimension_id: &str,
        edit: impl FnOnce(&mut Filter),
    ) -> FilterOutcome {
        let Some(kind) = self.dataset.dimension(dimension_id).map(|d| d.kind) else {
            warn!(dimension = %dimension_id, "filter ignored, unknown dimension");
            return FilterOutcome::IgnoredUnknownDimension;
        };
        if !self.selection.contains_dimension(dimension_id) {
            log_filter_outcome(dimension_id, FilterOutcome::IgnoredNotSelected);
            return FilterOutcome::IgnoredNotSelected;
        }
        let mut filter = self
            .selection
            .filter(dimension_id)
            .cloned()
            .unwrap_or_else(|| Filter::unconstrained(kind));
        edit(&mut filter);
        self.set_filter(dimension_id, filter)
    }

    /// Removes the filter of a selected dimension.
    pub fn clear_filter(&mut self, dimension_id: &str) -> FilterOutcome {
        let outcome = self.selection.clear_filter(dimension_id);
        log_filter_outcome(dimension_id, outcome);
        self.refresh();
        outcome
    }

    /// Removes every filter.
    pub fn clear_filters(&mut self) {
        self.selection.clear_filters();
        debug!("filters cleared");
        self.refresh();
    }

    /// Selects a node, or none.
    ///
    /// A node outside the filtered set is immediately replaced by the first
    /// filtered node.
    pub fn select_node(&mut self, node_id: Option<&str>) {
        self.selection.select_node(node_id.map(str::to_owned));
        debug!(node = ?node_id, "node selected");
        self.refresh();
    }

    /// Hides the third-dimension notice.
    pub fn dismiss_notice(&mut self) {
        self.selection.dismiss_blocked();
    }

    /// Returns the cached derived data.
    #[must_use]
    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    /// Computes the derived data from scratch, bypassing the cache.
    ///
    /// The result always equals [`Self::derived`].
    #[must_use]
    pub fn recompute_uncached(&self) -> Derived {
        Derived::compute(&self.dataset, &self.selection)
    }

    /// Iterates the nodes passing every active filter, in dataset order.
    pub fn filtered_nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        let nodes = self.dataset.nodes();
        self.derived.filtered.iter().map(move |&i| &nodes[i])
    }

    /// Returns the axis of a selected dimension over the filtered nodes.
    #[must_use]
    pub fn axis(&self, dimension_id: &str) -> Option<&Axis> {
        self.derived
            .axes
            .iter()
            .find(|(id, _)| id == dimension_id)
            .map(|(_, axis)| axis)
    }

    /// Returns one slot per selected dimension, in selection order.
    #[must_use]
    pub fn axis_slots(&self) -> Vec<AxisSlot<'_>> {
        self.selection
            .dimensions()
            .iter()
            .map(|id| match (self.dataset.dimension(id), self.axis(id)) {
                (Some(dimension), Some(axis)) => AxisSlot::Ready { dimension, axis },
                _ => AxisSlot::Unavailable(id.as_str()),
            })
            .collect()
    }

    /// Returns the visualization the selection calls for.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::for_count(self.selection.dimensions().len())
    }

    /// Returns the advisory text after a blocked toggle.
    #[must_use]
    pub fn selection_notice(&self) -> Option<&'static str> {
        self.selection
            .is_blocked()
            .then_some(THIRD_DIMENSION_NOTICE)
    }

    /// Returns the selected node.
    #[must_use]
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection
            .selected_node()
            .and_then(|id| self.dataset.node(id))
    }

    /// Describes a node for the details panel.
    #[must_use]
    pub fn node_details(&self, node_id: &str) -> Option<NodeDetails<'_>> {
        let node = self.dataset.node(node_id)?;
        let rows = self
            .dataset
            .dimensions()
            .iter()
            .map(|dimension| DetailRow {
                dimension,
                display: display_value(node.value(&dimension.id), &self.config.missing_display),
            })
            .collect();
        Some(NodeDetails {
            id: &node.id,
            label: &node.label,
            rows,
        })
    }

    /// Lists the labels a categorical filter on `dimension_id` can choose from.
    ///
    /// Options come from every node, not only the filtered ones, so that
    /// de-selected categories remain available.
    #[must_use]
    pub fn category_options(&self, dimension_id: &str) -> Vec<String> {
        category_options(self.dataset.nodes(), dimension_id)
    }

    /// Lays out the 1D strip when exactly one available dimension is selected.
    #[must_use]
    pub fn one_d_view(&self) -> Option<OneDView<'_>> {
        let [id] = self.selection.dimensions() else {
            return None;
        };
        let dimension = self.dataset.dimension(id)?;
        let axis = self.axis(id)?;
        let frame = self.config.plot.frame();
        Some(OneDView {
            dimension,
            ticks: frame.x_ticks(axis),
            entries: one_d_entries(
                self.filtered_nodes(),
                id,
                axis,
                &frame,
                self.selection.selected_node(),
            ),
        })
    }

    /// Lays out the scatter plot when two available dimensions are selected.
    #[must_use]
    pub fn scatter_view(&self) -> Option<ScatterView<'_>> {
        let [x_id, y_id] = self.selection.dimensions() else {
            return None;
        };
        let x_dimension = self.dataset.dimension(x_id)?;
        let y_dimension = self.dataset.dimension(y_id)?;
        let x_axis = self.axis(x_id)?;
        let y_axis = self.axis(y_id)?;
        let frame = self.config.plot.frame();
        Some(ScatterView {
            x_dimension,
            y_dimension,
            x_ticks: frame.x_ticks(x_axis),
            y_ticks: frame.y_ticks(y_axis),
            points: scatter_points(
                self.filtered_nodes(),
                (x_id.as_str(), x_axis),
                (y_id.as_str(), y_axis),
                &frame,
                self.selection.selected_node(),
            ),
        })
    }

    fn refresh(&mut self) {
        let revision = self.selection.filter_revision();
        if self.derived_at == Some(revision) {
            debug!(revision, "filtered set cache hit");
        } else {
            self.derived = Derived::compute(&self.dataset, &self.selection);
            self.derived_at = Some(revision);
            debug!(
                revision,
                filtered = self.derived.filtered.len(),
                "filtered set cache miss"
            );
        }

        let nodes = self.dataset.nodes();
        let ids = self.derived.filtered.iter().map(|&i| nodes[i].id.as_str());
        if self.selection.reconcile_node(ids) {
            debug!(node = ?self.selection.selected_node(), "selected node reconciled");
        }
    }
}

fn log_filter_outcome(dimension_id: &str, outcome: FilterOutcome) {
    match outcome {
        FilterOutcome::IgnoredNotSelected => {
            warn!(dimension = %dimension_id, "filter ignored, dimension not selected");
        }
        FilterOutcome::IgnoredKindMismatch | FilterOutcome::IgnoredUnknownDimension => {}
        _ => debug!(dimension = %dimension_id, ?outcome, "filter updated"),
    }
}

// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable node and dimension catalog of a session.

use std::io::Read;

use dimlens_value::{Dimension, DimensionKind, Node};
use hashbrown::HashMap;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{LoadError, LoadResult};

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    nodes: Option<Vec<Node>>,
    #[serde(default)]
    dimensions: Option<Vec<RawDimension>>,
}

#[derive(Deserialize)]
struct RawDimension {
    id: String,
    name: String,
    kind: String,
}

/// Nodes and dimensions as loaded from a data document.
///
/// Ids are unique: when constructing a dataset, later entries reusing an id
/// are dropped with a warning. Both lists keep their document order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    nodes: Vec<Node>,
    dimensions: Vec<Dimension>,
    node_index: HashMap<String, usize>,
    dimension_index: HashMap<String, usize>,
}

impl Dataset {
    /// Creates a dataset, dropping entries with duplicate ids.
    #[must_use]
    pub fn new(nodes: Vec<Node>, dimensions: Vec<Dimension>) -> Self {
        let mut dataset = Self::default();
        for dimension in dimensions {
            if dataset.dimension_index.contains_key(&dimension.id) {
                warn!(id = %dimension.id, "dropping dimension with duplicate id");
                continue;
            }
            dataset
                .dimension_index
                .insert(dimension.id.clone(), dataset.dimensions.len());
            dataset.dimensions.push(dimension);
        }
        for node in nodes {
            if dataset.node_index.contains_key(&node.id) {
                warn!(id = %node.id, "dropping node with duplicate id");
                continue;
            }
            dataset.node_index.insert(node.id.clone(), dataset.nodes.len());
            dataset.nodes.push(node);
        }
        dataset
    }

    /// Parses a data document of the shape
    /// `{"nodes": [{"id", "label", "dimensions": {..}}], "dimensions": [{"id", "name", "kind"}]}`.
    ///
    /// Absent lists are empty, and a node whose `dimensions` field is absent or
    /// not an object has no attributes.
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Reads and parses a data document, like [`Self::from_json_str`].
    ///
    /// Failures of `reader` itself are reported as [`LoadError::Io`].
    pub fn from_reader<R: Read>(mut reader: R) -> LoadResult<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    fn from_raw(raw: RawDocument) -> LoadResult<Self> {
        let dimensions = raw
            .dimensions
            .unwrap_or_default()
            .into_iter()
            .map(|d| {
                let kind = d
                    .kind
                    .parse::<DimensionKind>()
                    .map_err(|source| LoadError::UnknownKind {
                        id: d.id.clone(),
                        source,
                    })?;
                Ok(Dimension::new(d.id, d.name, kind))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let dataset = Self::new(raw.nodes.unwrap_or_default(), dimensions);
        info!(
            nodes = dataset.nodes.len(),
            dimensions = dataset.dimensions.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Returns all nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all dimensions in document order.
    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Looks up a dimension by id.
    #[must_use]
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimension_index.get(id).map(|&idx| &self.dimensions[idx])
    }

    /// Returns `true` if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

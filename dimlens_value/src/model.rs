// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension and node records.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::Value;

/// The three kinds of dimension a value can be interpreted as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    /// Values are finite numbers.
    Numeric,
    /// Values are calendar dates or date-times.
    Datetime,
    /// Values are display labels.
    Categorical,
}

impl DimensionKind {
    /// Returns the lowercase name used in data documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Datetime => "datetime",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dimension kind string that is none of the recognized kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDimensionKind(pub String);

impl fmt::Display for UnknownDimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dimension kind `{}` (expected numeric, datetime, or categorical)",
            self.0
        )
    }
}

impl core::error::Error for UnknownDimensionKind {}

impl FromStr for DimensionKind {
    type Err = UnknownDimensionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(Self::Numeric),
            "datetime" => Ok(Self::Datetime),
            "categorical" => Ok(Self::Categorical),
            other => Err(UnknownDimensionKind(other.to_owned())),
        }
    }
}

/// A named, typed attribute along which nodes can be filtered and plotted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Identifier, unique within a dimension catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// How values of this dimension are interpreted.
    pub kind: DimensionKind,
}

impl Dimension {
    /// Creates a dimension.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: DimensionKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

static MISSING: Value = Value::Missing;

/// A data record: an id, a display label, and raw values keyed by dimension id.
///
/// On deserialization the attribute map is read from the `dimensions` field;
/// a missing or non-object field yields an empty map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within a dataset.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Raw values keyed by dimension id.
    #[serde(
        rename = "dimensions",
        default,
        deserialize_with = "lenient_attributes"
    )]
    pub attributes: BTreeMap<String, Value>,
}

impl Node {
    /// Creates a node without attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds or replaces an attribute value, builder style.
    #[must_use]
    pub fn with(mut self, dimension_id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(dimension_id.into(), value.into());
        self
    }

    /// Returns the raw value for `dimension_id`, or [`Value::Missing`] if absent.
    #[must_use]
    pub fn value(&self, dimension_id: &str) -> &Value {
        self.attributes.get(dimension_id).unwrap_or(&MISSING)
    }
}

fn lenient_attributes<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

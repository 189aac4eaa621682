// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw attribute values.

use serde::{Deserialize, Serialize};

/// A raw attribute value as delivered by the data source.
///
/// The three shapes mirror what a JSON document can hold for an attribute:
/// a number, a string, or nothing. Text is kept exactly as delivered; whether
/// it counts as missing is decided by [`Value::is_missing`], which trims.
///
/// Deserialization is lenient: booleans become their text form, and arrays or
/// objects become [`Value::Missing`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    /// A numeric value. May be non-finite when constructed in code.
    Number(f64),
    /// A textual value, untrimmed.
    Text(String),
    /// No value.
    #[default]
    Missing,
}

impl Value {
    /// Returns `true` if this value is missing.
    ///
    /// Empty and whitespace-only text is missing, the same as an absent key or
    /// `null`.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Returns the text if this is a [`Value::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Missing, Self::Number),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Bool(b) => Self::Text(if b { "true" } else { "false" }.to_owned()),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Self::Missing,
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number),
            Value::Text(s) => Self::String(s),
            Value::Missing => Self::Null,
        }
    }
}

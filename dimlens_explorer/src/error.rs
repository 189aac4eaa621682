// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dimlens_value::UnknownDimensionKind;
use thiserror::Error;

/// Errors raised while loading a data document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document could not be read.
    #[error("failed to read data document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed data document: {0}")]
    Json(#[from] serde_json::Error),

    /// A dimension declares a kind other than numeric, datetime, or categorical.
    #[error("dimension `{id}`: {source}")]
    UnknownKind {
        /// The offending dimension id.
        id: String,
        /// The rejected kind.
        #[source]
        source: UnknownDimensionKind,
    },
}

/// Errors raised while reading an explorer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or has mistyped fields.
    #[error("malformed explorer config: {0}")]
    Json(#[from] serde_json::Error),

    /// The plot geometry cannot hold a drawing area.
    #[error("invalid plot geometry: {0}")]
    Geometry(String),
}

/// Result type for data loading.
pub type LoadResult<T> = Result<T, LoadError>;

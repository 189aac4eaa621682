// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::PlotFrame;

/// Placeholder shown in node details for a missing value.
pub const DEFAULT_MISSING_DISPLAY: &str = "–";

/// Session-wide presentation settings.
///
/// Every field has a default, so a partial JSON document such as
/// `{"plot": {"width": 800}}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Geometry of the 1D strip and 2D scatter plot.
    pub plot: PlotConfig,
    /// Text shown for missing values in node details.
    pub missing_display: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            plot: PlotConfig::default(),
            missing_display: DEFAULT_MISSING_DISPLAY.to_owned(),
        }
    }
}

impl ExplorerConfig {
    /// Parses and validates a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.plot.validate()?;
        Ok(config)
    }
}

/// Plot geometry in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Inset on every side between the outer bounds and the drawing area.
    pub padding: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 40.0,
        }
    }
}

impl PlotConfig {
    /// Returns the frame described by this geometry.
    #[must_use]
    pub fn frame(&self) -> PlotFrame {
        PlotFrame::new(self.width, self.height, self.padding)
    }

    /// Checks that the padded drawing area is non-empty and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [self.width, self.height, self.padding];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::Geometry(format!(
                "dimensions must be finite and non-negative, got {}x{} padding {}",
                self.width, self.height, self.padding
            )));
        }
        if self.width <= 2.0 * self.padding || self.height <= 2.0 * self.padding {
            return Err(ConfigError::Geometry(format!(
                "padding {} leaves no drawing area in {}x{}",
                self.padding, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = ExplorerConfig::from_json_str(r#"{"plot": {"width": 800}}"#).unwrap();
        assert_eq!(config.plot.width, 800.0);
        assert_eq!(config.plot.height, 400.0);
        assert_eq!(config.plot.padding, 40.0);
        assert_eq!(config.missing_display, DEFAULT_MISSING_DISPLAY);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let err = ExplorerConfig::from_json_str(r#"{"plot": {"width": 60, "padding": 30}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Geometry(_)));

        let err = ExplorerConfig::from_json_str(r#"{"plot": {"height": -1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Geometry(_)));
    }

    #[test]
    fn rejects_mistyped_fields() {
        let err = ExplorerConfig::from_json_str(r#"{"missing_display": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}

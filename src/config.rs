//! Layout configuration.
//!
//! All parameters have sensible defaults for a full-page topic plot.

use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotRect};
use crate::error::LayoutError;

/// Configuration for a layout pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of topics (K). Every document's weight vector must have
    /// exactly this many entries.
    /// Default: 4
    pub num_topics: usize,

    /// Plot rectangle (outer size plus margins). Dividers, labels, and
    /// document points all stay inside the margin-inset region.
    pub rect: PlotRect,

    /// Label anchor radius as a fraction of the distance from the origin
    /// to the nearer of the top/bottom drawable edges.
    /// Default: 0.8
    pub label_radius_ratio: f32,

    /// Half-width substituted for a collapsed data extent (all documents
    /// projecting to the same coordinate) so scales never divide by zero.
    /// Default: 1.0
    pub fallback_half_extent: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            num_topics: 4,
            rect: PlotRect::default(),
            label_radius_ratio: 0.8,
            fallback_half_extent: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a given topic count and outer plot size, with
    /// zero margins.
    pub fn for_plot(num_topics: usize, width: f32, height: f32) -> Self {
        Self {
            num_topics,
            rect: PlotRect::new(width, height, Margins::zero()),
            ..Self::default()
        }
    }

    /// Validate the configuration.
    ///
    /// Rejects a zero topic count and rectangles whose drawable region has
    /// a non-positive extent after margins.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.num_topics == 0 {
            return Err(LayoutError::InvalidTopicCount(self.num_topics));
        }
        if self.rect.inner_width() <= 0.0 || self.rect.inner_height() <= 0.0 {
            return Err(LayoutError::InvalidRect(format!(
                "drawable region is {}x{} after margins",
                self.rect.inner_width(),
                self.rect.inner_height()
            )));
        }
        if self.label_radius_ratio <= 0.0 || self.label_radius_ratio > 1.0 {
            return Err(LayoutError::InvalidParameter(format!(
                "label radius ratio {} outside (0, 1]",
                self.label_radius_ratio
            )));
        }
        if self.fallback_half_extent <= 0.0 {
            return Err(LayoutError::InvalidParameter(format!(
                "fallback half extent {} must be positive",
                self.fallback_half_extent
            )));
        }
        Ok(())
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, LayoutError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| LayoutError::IoError(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        serde_yaml::from_str(yaml).map_err(|e| LayoutError::ParseError(e.to_string()))
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml_file(&self, path: &std::path::Path) -> Result<(), LayoutError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| LayoutError::IoError(e.to_string()))
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, LayoutError> {
        serde_yaml::to_string(self).map_err(|e| LayoutError::ParseError(e.to_string()))
    }
}

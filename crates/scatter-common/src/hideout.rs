//! Display configuration ("hideout") carried on the rendering context.
//!
//! The host mapping library attaches this payload to the layer and hands it
//! back to the marker callbacks on every render pass. All fields are
//! optional; [`Hideout::resolve`] merges a possibly-absent caller
//! configuration over the built-in defaults, key by key, taking each value
//! wholesale (no deep merging). Field names serialize camelCase to match
//! the wire shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colorscale::Colorscale;
use crate::error::{ScatterError, ScatterResult};

/// Property read from each feature when none is configured.
pub const DEFAULT_COLOR_PROP: &str = "value";

/// Display options as supplied by the caller; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hideout {
    /// Name of the feature property driving label and color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_prop: Option<String>,

    /// Circle styling passed through to the host library
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_options: Option<CircleOptions>,

    /// Lower domain bound for continuous coloring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper domain bound for continuous coloring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<Colorscale>,

    /// Classification thresholds; presence switches coloring to discrete
    /// mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<f64>>,
}

impl Hideout {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> ScatterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ScatterResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Merge a possibly-absent caller configuration over the defaults.
    ///
    /// Each field takes the caller's value when present, else the default.
    /// Neither input is mutated.
    pub fn resolve(hideout: Option<&Hideout>) -> ResolvedHideout {
        let defaults = ResolvedHideout::default();
        let Some(hideout) = hideout else {
            return defaults;
        };
        ResolvedHideout {
            color_prop: hideout
                .color_prop
                .clone()
                .unwrap_or(defaults.color_prop),
            circle_options: hideout
                .circle_options
                .clone()
                .unwrap_or(defaults.circle_options),
            min: hideout.min.unwrap_or(defaults.min),
            max: hideout.max.unwrap_or(defaults.max),
            colorscale: hideout.colorscale.clone().unwrap_or(defaults.colorscale),
            classes: hideout.classes.clone(),
        }
    }

    /// Surface configuration defects before any marker is rendered.
    pub fn validate(&self) -> ScatterResult<()> {
        Hideout::resolve(Some(self)).validate()
    }
}

/// Styling for plain circle markers, passed through to the host library
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleOptions {
    pub fill_opacity: f64,
    pub stroke: bool,
    pub radius: f64,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            fill_opacity: 1.0,
            stroke: false,
            radius: 8.0,
        }
    }
}

/// Display options with every field populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHideout {
    pub color_prop: String,
    pub circle_options: CircleOptions,
    pub min: f64,
    pub max: f64,
    pub colorscale: Colorscale,
    /// Still optional after resolution: absence selects continuous mode
    pub classes: Option<Vec<f64>>,
}

impl Default for ResolvedHideout {
    fn default() -> Self {
        Self {
            color_prop: DEFAULT_COLOR_PROP.to_string(),
            circle_options: CircleOptions::default(),
            min: 0.0,
            max: 1.0,
            colorscale: Colorscale::default(),
            classes: None,
        }
    }
}

impl ResolvedHideout {
    /// Check the configuration against the full defect taxonomy.
    pub fn validate(&self) -> ScatterResult<()> {
        let colors = self.colorscale.resolve()?;

        match &self.classes {
            Some(classes) => {
                if classes.is_empty() {
                    return Err(ScatterError::EmptyClasses);
                }
                // Each threshold indexes its colorscale entry by position
                if classes.len() > colors.len() {
                    return Err(ScatterError::ClassCountMismatch {
                        classes: classes.len(),
                        colors: colors.len(),
                    });
                }
            }
            None => {
                if !(self.min < self.max) {
                    return Err(ScatterError::InvalidDomain {
                        min: self.min,
                        max: self.max,
                    });
                }
            }
        }
        Ok(())
    }
}

//! Colorbar (legend) descriptor matching the marker coloring.

use serde::Serialize;

use scatter_common::{Hideout, Rgba, ScatterResult};

/// Default colorbar width in CSS pixels.
pub const DEFAULT_WIDTH: u32 = 20;

/// Default colorbar height in CSS pixels.
pub const DEFAULT_HEIGHT: u32 = 150;

/// Legend descriptor for the host library's colorbar component.
///
/// Presets are expanded to concrete colors so the legend always mirrors
/// what the markers actually draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colorbar {
    /// Concrete stop colors as CSS hex strings
    pub colorscale: Vec<String>,
    pub min: f64,
    pub max: f64,
    pub width: u32,
    pub height: u32,
}

impl Colorbar {
    /// Build from the same hideout that drives the markers.
    pub fn from_hideout(hideout: Option<&Hideout>) -> ScatterResult<Self> {
        let resolved = Hideout::resolve(hideout);
        let colors = resolved.colorscale.resolve()?;

        Ok(Self {
            colorscale: colors.iter().map(|c| Rgba::to_hex(*c)).collect(),
            min: resolved.min,
            max: resolved.max,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        })
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

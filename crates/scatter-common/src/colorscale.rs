//! Colorscales: explicit color-stop lists and named presets.

use serde::{Deserialize, Serialize};

use crate::color::{Color, Rgba};
use crate::error::{ScatterError, ScatterResult};

/// An ordered sequence of color stops, given either explicitly or by
/// preset name.
///
/// Deserializes from the two shapes the hideout payload uses on the wire:
/// a JSON array of colors, or a preset name such as `"Viridis"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colorscale {
    /// Named preset ("rainbow", "hot", "viridis"; case-insensitive)
    Preset(String),

    /// Explicit list of color stops
    Stops(Vec<Color>),
}

impl Default for Colorscale {
    fn default() -> Self {
        Colorscale::Stops(vec!["yellow".into(), "red".into(), "black".into()])
    }
}

impl Colorscale {
    /// Resolve to concrete RGBA stops.
    ///
    /// Errors on an unknown preset name, an unparseable color, or an empty
    /// stop list.
    pub fn resolve(&self) -> ScatterResult<Vec<Rgba>> {
        let colors = match self {
            Colorscale::Preset(name) => preset_stops(name)?,
            Colorscale::Stops(stops) => stops
                .iter()
                .map(Color::resolve)
                .collect::<ScatterResult<Vec<_>>>()?,
        };
        if colors.is_empty() {
            return Err(ScatterError::EmptyColorscale);
        }
        Ok(colors)
    }
}

fn preset_stops(name: &str) -> ScatterResult<Vec<Rgba>> {
    let stops: &[&str] = match name.to_lowercase().as_str() {
        "rainbow" => &["purple", "blue", "green", "yellow", "red"],
        // Simplified viridis with 5 stops
        "viridis" => &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"],
        "hot" => &["yellow", "red", "black"],
        _ => return Err(ScatterError::UnknownPreset(name.to_string())),
    };
    stops.iter().map(|s| Color::from(*s).resolve()).collect()
}

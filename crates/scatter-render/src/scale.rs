//! Value-to-color resolution.
//!
//! A [`ColorScale`] is built once from a resolved hideout (fallible, all
//! configuration defects surface here) and then maps values to colors
//! infallibly during the render pass.

use scatter_common::{Hideout, ResolvedHideout, Rgba, ScatterResult};

/// A prepared color mapping, either continuous or discrete.
///
/// The mode is selected solely by the presence of `classes` in the
/// resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScale {
    /// Gradient spanning `[min, max]` with evenly spaced stops
    Continuous {
        min: f64,
        max: f64,
        colors: Vec<Rgba>,
    },

    /// Bucket classification: threshold `i` selects color `i`
    Discrete {
        classes: Vec<f64>,
        colors: Vec<Rgba>,
    },
}

impl ColorScale {
    /// Build from a caller-supplied (possibly absent) hideout.
    pub fn resolve(hideout: Option<&Hideout>) -> ScatterResult<Self> {
        Self::from_resolved(&Hideout::resolve(hideout))
    }

    /// Build from already-resolved options, validating them first.
    pub fn from_resolved(resolved: &ResolvedHideout) -> ScatterResult<Self> {
        resolved.validate()?;
        let colors = resolved.colorscale.resolve()?;

        let scale = match &resolved.classes {
            Some(classes) => ColorScale::Discrete {
                classes: classes.clone(),
                colors,
            },
            None => ColorScale::Continuous {
                min: resolved.min,
                max: resolved.max,
                colors,
            },
        };
        tracing::debug!(?scale, "resolved color scale");
        Ok(scale)
    }

    /// Color for a value.
    ///
    /// Continuous mode yields a color for every value (out-of-domain
    /// values clamp to the boundary stops). Discrete mode yields `None`
    /// when the value exceeds no threshold; callers treat that as
    /// "no match", not an error.
    ///
    /// Scales built through [`ColorScale::from_resolved`] always have a
    /// color per threshold and a non-empty palette; hand-built scales
    /// violating that degrade to `None` rather than panicking.
    pub fn color_for(&self, value: f64) -> Option<Rgba> {
        match self {
            ColorScale::Continuous { min, max, colors } => {
                if colors.is_empty() {
                    return None;
                }
                Some(interpolate(colors, *min, *max, value))
            }
            ColorScale::Discrete { classes, colors } => {
                // Last exceeded threshold in iteration order wins. Classes
                // are conventionally ascending but are deliberately neither
                // sorted nor required to be; for unsorted input the highest
                // index still wins.
                let mut color = None;
                for (i, class) in classes.iter().enumerate() {
                    if value > *class {
                        color = colors.get(i).copied();
                    }
                }
                color
            }
        }
    }
}

/// Linear interpolation across evenly spaced stops, clamped to the domain.
fn interpolate(colors: &[Rgba], min: f64, max: f64, value: f64) -> Rgba {
    if colors.len() == 1 {
        return colors[0];
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let position = t * (colors.len() - 1) as f64;
    let i = (position.floor() as usize).min(colors.len() - 2);
    colors[i].lerp(colors[i + 1], position - i as f64)
}

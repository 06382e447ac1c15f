//! Color representation and conversion.
//!
//! Configuration accepts colors in the formats web mapping tools commonly
//! use: hex strings, CSS color names, channel arrays, or explicit RGBA.
//! Everything resolves down to [`Rgba`] before rendering.

use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Color as it appears in configuration, supporting multiple formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Hex string ("#RRGGBB" or "#RRGGBBAA") or CSS color name
    Css(String),

    /// Channel array: [r, g, b] or [r, g, b, a]
    Array(Vec<u8>),

    /// Explicit RGBA
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    /// Resolve to a concrete RGBA value.
    ///
    /// Unlike lenient CSS parsers this rejects unknown names and malformed
    /// hex strings so configuration defects surface at setup time.
    pub fn resolve(&self) -> ScatterResult<Rgba> {
        match self {
            Color::Css(s) => {
                if let Some(rgba) = named_color(s) {
                    return Ok(rgba);
                }
                parse_hex_color(s)
            }
            Color::Array(arr) => match arr.as_slice() {
                [r, g, b] => Ok(Rgba::new(*r, *g, *b, 255)),
                [r, g, b, a] => Ok(Rgba::new(*r, *g, *b, *a)),
                _ => Err(ScatterError::InvalidColor {
                    color: format!("{:?}", arr),
                    message: "expected 3 or 4 channels".to_string(),
                }),
            },
            Color::Rgba { r, g, b, a } => Ok(Rgba::new(*r, *g, *b, *a)),
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::Css(s.to_string())
    }
}

/// A resolved color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Linear interpolation towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);

        let lerp_u8 =
            |a: u8, b: u8| -> u8 { ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8 };

        Rgba::new(
            lerp_u8(self.r, other.r),
            lerp_u8(self.g, other.g),
            lerp_u8(self.b, other.b),
            lerp_u8(self.a, other.a),
        )
    }

    /// CSS hex representation; alpha is appended only when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_hex_color(s: &str) -> ScatterResult<Rgba> {
    let invalid = |message: &str| ScatterError::InvalidColor {
        color: s.to_string(),
        message: message.to_string(),
    };

    let hex = s.trim_start_matches('#');
    // Length checks below count bytes; reject non-ASCII before slicing
    if !hex.is_ascii() {
        return Err(invalid("not a color name or #RRGGBB[AA] hex string"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid("invalid hex digit"))
    };

    match hex.len() {
        6 => Ok(Rgba::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Ok(Rgba::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(invalid("not a color name or #RRGGBB[AA] hex string")),
    }
}

fn named_color(name: &str) -> Option<Rgba> {
    let (r, g, b, a) = match name.to_lowercase().as_str() {
        "transparent" => (0, 0, 0, 0),
        "black" => (0, 0, 0, 255),
        "white" => (255, 255, 255, 255),
        "red" => (255, 0, 0, 255),
        "green" => (0, 255, 0, 255),
        "blue" => (0, 0, 255, 255),
        "yellow" => (255, 255, 0, 255),
        "cyan" => (0, 255, 255, 255),
        "magenta" => (255, 0, 255, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        _ => return None,
    };
    Some(Rgba::new(r, g, b, a))
}

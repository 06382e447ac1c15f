//! Icon descriptors consumed by the host library's `divIcon` constructor.
//!
//! Plain composition instead of subclassing: the host receives a
//! configuration object and builds the actual DOM icon itself.

use serde::Serialize;

use scatter_common::Rgba;

/// Logical icon size in CSS pixels.
pub const ICON_SIZE: (u32, u32) = (20, 20);

/// CSS class applied to every scatter icon.
pub const ICON_CLASS: &str = "marker-modified";

/// A labeled, colored div-icon descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterIcon {
    /// Inner HTML carrying the visible label
    pub html: String,

    /// (width, height) in CSS pixels
    pub icon_size: (u32, u32),

    pub class_name: String,

    /// CSS background color; `None` leaves the host's default background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ScatterIcon {
    /// Standard scatter icon: fixed size and class, the label wrapped for
    /// styling, the background from the color resolver.
    pub fn labeled(label: &str, background: Option<Rgba>) -> Self {
        Self {
            html: format!("<div><span>{}</span></div>", label),
            icon_size: ICON_SIZE,
            class_name: ICON_CLASS.to_string(),
            color: background.map(Rgba::to_hex),
        }
    }
}

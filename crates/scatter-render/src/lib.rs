//! Marker rendering helpers for Leaflet-style map layers.
//!
//! Maps a feature's data value to a labeled, colored icon:
//! - Color resolution (continuous gradient or discrete classification)
//! - Marker factory callbacks for points and clusters
//! - Colorbar descriptors matching the marker coloring

pub mod colorbar;
pub mod icon;
pub mod marker;
pub mod scale;

pub use colorbar::Colorbar;
pub use icon::{ScatterIcon, ICON_CLASS, ICON_SIZE};
pub use marker::{cluster_to_layer, format_label, point_to_layer, ClusterIndex, Marker, RenderContext};
pub use scale::ColorScale;

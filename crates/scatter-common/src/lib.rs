//! Common types shared across the scatter-layer crates.

pub mod color;
pub mod colorscale;
pub mod error;
pub mod feature;
pub mod hideout;

pub use color::{Color, Rgba};
pub use colorscale::Colorscale;
pub use error::{ScatterError, ScatterResult};
pub use feature::{value_range, Feature, LatLng};
pub use hideout::{CircleOptions, Hideout, ResolvedHideout, DEFAULT_COLOR_PROP};

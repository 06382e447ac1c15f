//! Geographic features: a position plus a bag of named properties.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single data point with coordinates and named properties.
///
/// Properties are kept as raw JSON values because the host mapping library
/// hands GeoJSON-style property bags to its callbacks; numbers and strings
/// are what occurs in practice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub lat_lng: LatLng,

    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat_lng: LatLng::new(lat, lng),
            properties: Map::new(),
        }
    }

    /// Builder-style property insertion.
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Numeric property value, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.properties.get(key).and_then(Value::as_f64)
    }

    /// String property value, if present and a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// The cluster id the clustering engine injects on synthetic cluster
    /// features.
    pub fn cluster_id(&self) -> Option<u64> {
        self.properties.get("cluster_id").and_then(Value::as_u64)
    }
}

/// Min/max of a numeric property across features.
///
/// Features lacking the property (or carrying a non-numeric value) are
/// skipped; `None` when no feature carries it. Used to size the color
/// domain before building a hideout.
pub fn value_range(features: &[Feature], prop: &str) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for value in features.iter().filter_map(|f| f.number(prop)) {
        range = Some(match range {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }
    range
}

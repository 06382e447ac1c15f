//! Common fixtures for scatter-layer tests.
//!
//! Pre-defined hideouts and station features representing the scenarios
//! the marker callbacks see in practice.

use scatter_common::{Colorscale, Feature, Hideout, LatLng};

/// Canonical hideout configurations.
pub mod hideouts {
    use super::*;

    /// Continuous temperature styling over a realistic domain.
    pub fn temperature() -> Hideout {
        Hideout {
            color_prop: Some("airTemperature".to_string()),
            min: Some(-20.0),
            max: Some(40.0),
            colorscale: Some(Colorscale::Stops(vec![
                "yellow".into(),
                "red".into(),
                "black".into(),
            ])),
            ..Default::default()
        }
    }

    /// Discrete snow-depth buckets (classes in ascending order).
    pub fn snow_classes() -> Hideout {
        Hideout {
            color_prop: Some("totalSnowDepth".to_string()),
            classes: Some(vec![0.0, 10.0, 20.0]),
            colorscale: Some(Colorscale::Stops(vec![
                "white".into(),
                "blue".into(),
                "purple".into(),
            ])),
            ..Default::default()
        }
    }
}

/// Canonical station features.
pub mod stations {
    use super::*;

    /// Position shared by the single-station fixtures.
    pub const BERLIN: LatLng = LatLng::new(52.52, 13.41);

    /// A station reporting a temperature.
    pub fn berlin(temperature: f64) -> Feature {
        Feature::new(BERLIN.lat, BERLIN.lng)
            .with_property("station", "Berlin-Tegel")
            .with_property("airTemperature", temperature)
    }

    /// A station with no measurements at all.
    pub fn silent() -> Feature {
        Feature::new(48.14, 11.58).with_property("station", "Muenchen-Stadt")
    }

    /// The synthetic feature the cluster engine emits for a cluster.
    pub fn cluster(cluster_id: u64, lat: f64, lng: f64) -> Feature {
        Feature::new(lat, lng)
            .with_property("cluster_id", cluster_id)
            .with_property("point_count", 3)
    }
}

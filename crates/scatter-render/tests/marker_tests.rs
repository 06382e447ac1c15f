//! Tests for the marker factory callbacks.

use std::collections::HashMap;

use scatter_common::{Colorscale, Feature, Hideout, LatLng, ScatterError};
use scatter_render::{cluster_to_layer, point_to_layer, ClusterIndex, Marker, RenderContext};
use test_utils::{hideouts, stations};

/// In-memory stand-in for the host's cluster engine.
struct StaticClusterIndex {
    leaves: HashMap<u64, Vec<Feature>>,
}

impl StaticClusterIndex {
    fn new(entries: Vec<(u64, Vec<Feature>)>) -> Self {
        Self {
            leaves: entries.into_iter().collect(),
        }
    }
}

impl ClusterIndex for StaticClusterIndex {
    fn get_leaves(&self, cluster_id: u64) -> Vec<Feature> {
        self.leaves.get(&cluster_id).cloned().unwrap_or_default()
    }
}

fn render_point(feature: &Feature, hideout: Hideout) -> Option<Marker> {
    point_to_layer(feature, stations::BERLIN, &RenderContext::new(hideout)).unwrap()
}

// ============================================================================
// point_to_layer tests
// ============================================================================

#[test]
fn test_point_marker_shape() {
    let marker = render_point(&stations::berlin(21.5), hideouts::temperature()).unwrap();

    assert_eq!(marker.lat_lng, stations::BERLIN);
    assert_eq!(marker.icon.html, "<div><span>22</span></div>");
    assert_eq!(marker.icon.icon_size, (20, 20));
    assert_eq!(marker.icon.class_name, "marker-modified");
    assert!(marker.icon.color.is_some());
}

#[test]
fn test_point_label_rounds_ties_away_from_zero() {
    let marker = render_point(&stations::berlin(7.6), hideouts::temperature()).unwrap();
    assert_eq!(marker.icon.html, "<div><span>8</span></div>");

    let marker = render_point(&stations::berlin(-2.5), hideouts::temperature()).unwrap();
    assert_eq!(marker.icon.html, "<div><span>-3</span></div>");
}

#[test]
fn test_point_color_uses_raw_value() {
    // 21.5 and 22.0 share a label after rounding but not a color
    let a = render_point(&stations::berlin(21.5), hideouts::temperature()).unwrap();
    let b = render_point(&stations::berlin(22.0), hideouts::temperature()).unwrap();
    assert_eq!(a.icon.html, b.icon.html);
    assert_ne!(a.icon.color, b.icon.color);
}

#[test]
fn test_point_missing_property_skips() {
    assert_eq!(render_point(&stations::silent(), hideouts::temperature()), None);
}

#[test]
fn test_point_non_numeric_property_skips() {
    let feature = stations::berlin(0.0).with_property("airTemperature", "warm");
    assert_eq!(render_point(&feature, hideouts::temperature()), None);
}

#[test]
fn test_point_default_hideout_reads_value_prop() {
    let feature = Feature::new(0.0, 0.0).with_property("value", 0.5);
    let marker = point_to_layer(&feature, LatLng::new(0.0, 0.0), &RenderContext::default())
        .unwrap()
        .unwrap();
    // Midpoint of the default yellow/red/black scale
    assert_eq!(marker.icon.color.as_deref(), Some("#ff0000"));
}

#[test]
fn test_point_discrete_no_match_leaves_color_unset() {
    let marker = render_point(
        &stations::berlin(0.0).with_property("totalSnowDepth", -5.0),
        hideouts::snow_classes(),
    )
    .unwrap();
    assert_eq!(marker.icon.color, None);
    assert_eq!(marker.icon.html, "<div><span>-5</span></div>");
}

#[test]
fn test_point_config_defect_fails_loudly() {
    let hideout = Hideout {
        colorscale: Some(Colorscale::Preset("magma".to_string())),
        ..Default::default()
    };
    let result = point_to_layer(
        &stations::berlin(21.5),
        stations::BERLIN,
        &RenderContext::new(hideout),
    );
    assert!(matches!(result, Err(ScatterError::UnknownPreset(_))));
}

#[test]
fn test_marker_wire_shape() {
    let marker = render_point(&stations::berlin(21.5), hideouts::temperature()).unwrap();
    let json = serde_json::to_value(&marker).unwrap();

    // camelCase keys, the shape the host library consumes
    assert_eq!(json["latLng"]["lat"], serde_json::json!(52.52));
    assert_eq!(json["icon"]["iconSize"], serde_json::json!([20, 20]));
    assert_eq!(json["icon"]["className"], "marker-modified");
    assert!(json["icon"]["color"].is_string());
}

// ============================================================================
// cluster_to_layer tests
// ============================================================================

fn cluster_setup() -> (Feature, LatLng, StaticClusterIndex) {
    let cluster = stations::cluster(17, 51.0, 10.0);
    let position = cluster.lat_lng;
    let index = StaticClusterIndex::new(vec![(
        17,
        vec![
            stations::berlin(12.3),
            stations::berlin(30.0),
            stations::silent(),
        ],
    )]);
    (cluster, position, index)
}

#[test]
fn test_cluster_uses_first_leaf_as_representative() {
    let (cluster, position, index) = cluster_setup();
    let context = RenderContext::new(hideouts::temperature());

    let marker = cluster_to_layer(&cluster, position, &index, &context)
        .unwrap()
        .unwrap();

    assert_eq!(marker.lat_lng, position);
    // First leaf reports 12.3, not the later 30.0
    assert_eq!(marker.icon.html, "<div><span>12</span></div>");
}

#[test]
fn test_cluster_repeated_calls_identical() {
    let (cluster, position, index) = cluster_setup();
    let context = RenderContext::new(hideouts::temperature());

    let first = cluster_to_layer(&cluster, position, &index, &context).unwrap();
    let second = cluster_to_layer(&cluster, position, &index, &context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cluster_representative_missing_property_skips() {
    // First leaf has no temperature; skip even though later leaves do
    let index = StaticClusterIndex::new(vec![(
        5,
        vec![stations::silent(), stations::berlin(20.0)],
    )]);
    let cluster = stations::cluster(5, 51.0, 10.0);
    let context = RenderContext::new(hideouts::temperature());

    let marker = cluster_to_layer(&cluster, cluster.lat_lng, &index, &context).unwrap();
    assert_eq!(marker, None);
}

#[test]
fn test_cluster_unknown_id_skips() {
    let index = StaticClusterIndex::new(vec![]);
    let cluster = stations::cluster(99, 51.0, 10.0);
    let context = RenderContext::new(hideouts::temperature());

    let marker = cluster_to_layer(&cluster, cluster.lat_lng, &index, &context).unwrap();
    assert_eq!(marker, None);
}

#[test]
fn test_cluster_feature_without_id_skips() {
    let index = StaticClusterIndex::new(vec![]);
    let not_a_cluster = stations::berlin(20.0);
    let context = RenderContext::new(hideouts::temperature());

    let marker =
        cluster_to_layer(&not_a_cluster, not_a_cluster.lat_lng, &index, &context).unwrap();
    assert_eq!(marker, None);
}

//! Marker factory: the two callbacks the host mapping library invokes per
//! visible feature or cluster during each render pass.
//!
//! Both are stateless per-call transformations. `Ok(None)` means "do not
//! render a marker for this feature" and is the explicit skip for a
//! missing color property; `Err` is reserved for configuration defects.

use serde::Serialize;

use scatter_common::{Feature, Hideout, LatLng, ResolvedHideout, ScatterResult};

use crate::icon::ScatterIcon;
use crate::scale::ColorScale;

/// Context the host library passes to its callbacks.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub hideout: Option<Hideout>,
}

impl RenderContext {
    pub fn new(hideout: Hideout) -> Self {
        Self {
            hideout: Some(hideout),
        }
    }
}

/// Leaf lookup into the host's cluster engine.
pub trait ClusterIndex {
    /// Member features of a cluster, in the engine's order.
    fn get_leaves(&self, cluster_id: u64) -> Vec<Feature>;
}

/// A renderable marker descriptor: an icon at a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub lat_lng: LatLng,
    pub icon: ScatterIcon,
}

/// Callback for single features.
pub fn point_to_layer(
    feature: &Feature,
    lat_lng: LatLng,
    context: &RenderContext,
) -> ScatterResult<Option<Marker>> {
    let resolved = Hideout::resolve(context.hideout.as_ref());
    let scale = ColorScale::from_resolved(&resolved)?;
    Ok(build_marker(feature, lat_lng, &resolved, &scale))
}

/// Callback for clusters.
///
/// The first leaf of the cluster is taken as representative for the label
/// and color; an unresolvable or empty cluster is skipped.
pub fn cluster_to_layer(
    feature: &Feature,
    lat_lng: LatLng,
    index: &dyn ClusterIndex,
    context: &RenderContext,
) -> ScatterResult<Option<Marker>> {
    let resolved = Hideout::resolve(context.hideout.as_ref());
    let scale = ColorScale::from_resolved(&resolved)?;

    let Some(cluster_id) = feature.cluster_id() else {
        tracing::debug!("cluster feature carries no cluster_id, skipping marker");
        return Ok(None);
    };
    let leaves = index.get_leaves(cluster_id);
    let Some(representative) = leaves.first() else {
        tracing::debug!(cluster_id, "cluster resolved to no leaves, skipping marker");
        return Ok(None);
    };

    Ok(build_marker(representative, lat_lng, &resolved, &scale))
}

fn build_marker(
    feature: &Feature,
    lat_lng: LatLng,
    resolved: &ResolvedHideout,
    scale: &ColorScale,
) -> Option<Marker> {
    let Some(value) = feature.number(&resolved.color_prop) else {
        tracing::debug!(
            color_prop = %resolved.color_prop,
            "feature lacks the color property, skipping marker"
        );
        return None;
    };

    // Label shows the rounded value; the color uses the raw one
    let icon = ScatterIcon::labeled(&format_label(value), scale.color_for(value));
    Some(Marker { lat_lng, icon })
}

/// Integer label for a property value, rounding ties away from zero.
pub fn format_label(value: f64) -> String {
    format!("{}", value.round() as i64)
}

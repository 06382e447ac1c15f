//! Generators for randomized station features.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use scatter_common::Feature;

/// Generate `count` station features with the given property drawn
/// uniformly from `[min, max)`.
///
/// Deterministic for a fixed seed so failures reproduce.
pub fn stations_with_property(
    seed: u64,
    count: usize,
    prop: &str,
    min: f64,
    max: f64,
) -> Vec<Feature> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let lat = rng.gen_range(47.0..55.0);
            let lng = rng.gen_range(6.0..15.0);
            Feature::new(lat, lng)
                .with_property("station", format!("station-{}", i))
                .with_property(prop, rng.gen_range(min..max))
        })
        .collect()
}

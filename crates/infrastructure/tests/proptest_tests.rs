//! Property-based tests for the tile layer
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::GeoLocation;
use infrastructure::TileLayer;
use proptest::prelude::*;

fn osm() -> TileLayer {
    TileLayer::new(
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        "© OpenStreetMap contributors",
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
    )
}

proptest! {
    #[test]
    fn tile_coordinates_stay_on_the_map(
        lat in -90.0f64..=90.0f64,
        lon in -180.0f64..=180.0f64,
        z in 0u8..=19u8
    ) {
        let (x, y) = TileLayer::tile_for(GeoLocation::new(lat, lon).unwrap(), z);
        let n = 1u32 << z;
        prop_assert!(x < n);
        prop_assert!(y < n);
    }

    #[test]
    fn tile_url_has_no_placeholders_left(x in 0u32..100_000, y in 0u32..100_000, z in 0u8..=19u8) {
        let url = osm().tile_url(x, y, z);
        prop_assert!(!url.contains('{'), "url still contains a placeholder: {}", url);
        let expected_suffix = format!("/{z}/{x}/{y}.png");
        prop_assert!(url.ends_with(&expected_suffix));
    }

    #[test]
    fn neighbouring_tiles_use_different_servers(x in 0u32..100_000, y in 0u32..100_000) {
        let layer = osm();
        prop_assert_ne!(layer.tile_url(x, y, 10)[..9].to_string(), layer.tile_url(x + 1, y, 10)[..9].to_string());
    }
}

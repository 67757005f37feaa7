//! End-to-end pipeline tests on literal scenes

use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use terrarisk_algorithms::prelude::*;

fn issued() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 6, 30, 0).unwrap()
}

/// Scene where water rose by exactly the detection threshold everywhere.
fn boundary_scene(size: usize) -> SceneGrids {
    SceneGrids::new(
        Grid::filled(size, size, 0.1),
        Grid::filled(size, size, 0.3),
        Grid::filled(size, size, 0.0),
        Grid::filled(size, size, 0.0),
    )
    .unwrap()
}

/// Flat, moderately rainy scene with one flooded block.
fn flood_scene(size: usize, block: (usize, usize, usize, usize)) -> SceneGrids {
    let (r0, c0, r1, c1) = block;
    let in_block = move |r: usize, c: usize| r >= r0 && r < r1 && c >= c0 && c < c1;

    SceneGrids::new(
        Grid::filled(size, size, 0.1),
        Grid::from_fn(size, size, |r, c| if in_block(r, c) { 0.6 } else { 0.1 }),
        Grid::filled(size, size, 0.0),
        Grid::filled(size, size, 100.0),
    )
    .unwrap()
}

#[test]
fn threshold_boundary_detects_nothing() {
    // A rise of exactly 0.2 up to an index of exactly 0.3 crosses neither
    // strict threshold
    let scene = boundary_scene(50);
    let result = assess_risk(&scene, 26.0, 92.0, issued(), &AssessmentParams::default()).unwrap();

    assert!(result.geojson.is_empty());
    assert!(result.alerts.is_empty());
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn flooded_block_becomes_one_low_region() {
    let scene = flood_scene(50, (10, 15, 20, 25));
    let result = assess_risk(&scene, 26.0, 92.0, issued(), &AssessmentParams::default()).unwrap();

    // Flat terrain contributes 0, 100 mm of rain contributes 5.5:
    // flagged cells score 55.5, their surroundings only the bonus of 10
    assert_eq!(result.geojson.len(), 1);
    let props = &result.geojson.features[0].properties;
    assert_eq!(props.risk_level, "LOW");
    assert_eq!(props.color, "#fbbf24");
    assert_relative_eq!(props.risk_score, 55.5, epsilon = 1e-9);
    assert_relative_eq!(props.area_km2, 100.0);

    assert_eq!(result.alerts.len(), 1);
    let alert = &result.alerts[0];
    assert_eq!(alert.id, "ALERT-20240715-000");
    assert_eq!(alert.level, "LOW");
    assert_relative_eq!(alert.confidence, 60.0 + 15.5 * 0.7, epsilon = 1e-9);
    assert_relative_eq!(result.confidence, alert.confidence, epsilon = 1e-9);

    assert_eq!(result.summary.total_alerts, 1);
    assert_eq!(result.summary.low_risk_count, 1);
    assert_eq!(result.summary.high_risk_count, 0);
    assert_relative_eq!(result.summary.total_risk_area_km2, 100.0);
}

#[test]
fn flooded_block_ring_matches_projection() {
    let scene = flood_scene(50, (10, 15, 20, 25));
    let result = assess_risk(&scene, 26.0, 92.0, issued(), &AssessmentParams::default()).unwrap();

    let ring = result.geojson.features[0].geometry.exterior();
    let d = 1.0 / 111.0;
    let (lat_max, lat_min) = (26.0 - 10.0 * d, 26.0 - 20.0 * d);
    let (lon_min, lon_max) = (92.0 + 15.0 * d, 92.0 + 25.0 * d);

    assert_eq!(ring.len(), 5);
    assert_relative_eq!(ring[0][0], lon_min, epsilon = 1e-12);
    assert_relative_eq!(ring[0][1], lat_min, epsilon = 1e-12);
    assert_relative_eq!(ring[1][0], lon_max, epsilon = 1e-12);
    assert_relative_eq!(ring[2][1], lat_max, epsilon = 1e-12);
    assert_eq!(ring[0], ring[4]);

    let props = &result.geojson.features[0].properties;
    assert_relative_eq!(props.center_lat, (lat_min + lat_max) / 2.0, epsilon = 1e-12);
    assert_relative_eq!(props.center_lon, (lon_min + lon_max) / 2.0, epsilon = 1e-12);
}

/// Scene producing regions in several bands with distinct areas.
fn mixed_scene(size: usize) -> SceneGrids {
    let blocks: [(usize, usize, usize, usize); 3] = [
        (2, 2, 8, 8),     // heavy rain → MEDIUM
        (20, 20, 30, 30), // large LOW
        (40, 40, 44, 44), // small LOW
    ];
    let in_block =
        move |r: usize, c: usize| blocks.iter().any(|&(r0, c0, r1, c1)| r >= r0 && r < r1 && c >= c0 && c < c1);

    SceneGrids::new(
        Grid::filled(size, size, 0.1),
        Grid::from_fn(size, size, |r, c| if in_block(r, c) { 0.6 } else { 0.1 }),
        Grid::filled(size, size, 0.0),
        Grid::from_fn(size, size, |r, c| {
            if r < 10 && c < 10 {
                300.0
            } else {
                100.0
            }
        }),
    )
    .unwrap()
}

#[test]
fn alerts_sorted_by_severity_then_area() {
    let scene = mixed_scene(50);
    let result = assess_risk(&scene, 26.0, 92.0, issued(), &AssessmentParams::default()).unwrap();

    assert_eq!(result.alerts.len(), 3);
    let levels: Vec<&str> = result.alerts.iter().map(|a| a.level.as_str()).collect();
    assert_eq!(levels, ["MEDIUM", "LOW", "LOW"]);
    assert_relative_eq!(result.alerts[0].area_km2, 36.0);
    assert_relative_eq!(result.alerts[1].area_km2, 100.0);
    assert_relative_eq!(result.alerts[2].area_km2, 16.0);

    // Ordering invariant holds pairwise
    for pair in result.alerts.windows(2) {
        let rank = |level: &str| RiskBand::from_name(level).unwrap().rank();
        let (a, b) = (&pair[0], &pair[1]);
        assert!(rank(&a.level) <= rank(&b.level));
        if rank(&a.level) == rank(&b.level) {
            assert!(a.area_km2 >= b.area_km2);
        }
    }

    assert_eq!(result.summary.medium_risk_count, 1);
    assert_eq!(result.summary.low_risk_count, 2);
    assert_relative_eq!(result.summary.total_risk_area_km2, 152.0);
}

#[test]
fn every_feature_scores_inside_a_band() {
    let scene = mixed_scene(50);
    let result = assess_risk(&scene, 26.0, 92.0, issued(), &AssessmentParams::default()).unwrap();

    for feature in result.geojson.iter() {
        let props = &feature.properties;
        let band = RiskBand::from_name(&props.risk_level).expect("known band");
        assert!(band.contains(props.risk_score));
        assert!(props.area_km2 >= 3.0);
    }
}

#[test]
fn assessment_is_deterministic() {
    let scene = mixed_scene(50);
    let params = AssessmentParams::default();

    let first = assess_risk(&scene, 26.0, 92.0, issued(), &params).unwrap();
    let second = assess_risk(&scene, 26.0, 92.0, issued(), &params).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn geojson_serializes_with_expected_shape() {
    let scene = flood_scene(50, (10, 15, 20, 25));
    let result = assess_risk(&scene, 26.0, 92.0, issued(), &AssessmentParams::default()).unwrap();

    let json: serde_json::Value = serde_json::to_value(&result.geojson).unwrap();
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"][0]["geometry"]["type"], "Polygon");
    assert!(json["features"][0]["properties"]["risk_score"].is_f64());
}

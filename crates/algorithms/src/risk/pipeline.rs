//! One-shot risk assessment pipeline
//!
//! Runs every stage in order on one scene: change detection, factor
//! grids, composite scoring, region extraction, vectorization and alert
//! synthesis. The whole computation either completes or fails before
//! producing anything; there is no partial output and no state carried
//! between invocations.

use super::alerts::{synthesize_alerts, Alert};
use super::band::RiskBand;
use super::composite::composite_risk;
use super::rainfall::rainfall_factor;
use super::regions::{extract_regions, RegionParams};
use super::vectorize::vectorize_regions;
use crate::imagery::{detect_water_change, WaterChangeParams};
use crate::terrain::{slope_factor, SlopeFactorParams};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use terrarisk_core::vector::FeatureCollection;
use terrarisk_core::{GeoProjector, Result, SceneGrids};

/// Parameters for a full risk assessment
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentParams {
    pub water_change: WaterChangeParams,
    pub slope: SlopeFactorParams,
    pub regions: RegionParams,
    /// Ground distance covered by one pixel, in kilometers
    pub km_per_pixel: f64,
}

impl Default for AssessmentParams {
    fn default() -> Self {
        Self {
            water_change: WaterChangeParams::default(),
            slope: SlopeFactorParams::default(),
            regions: RegionParams::default(),
            km_per_pixel: 1.0,
        }
    }
}

/// Aggregate counts over the synthesized alerts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub total_alerts: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    pub total_risk_area_km2: f64,
}

/// Complete result of one risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub geojson: FeatureCollection,
    pub alerts: Vec<Alert>,
    /// Mean alert confidence, 0.0 when nothing was detected
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub summary: AssessmentSummary,
}

fn summarize(alerts: &[Alert]) -> AssessmentSummary {
    let count_level = |band: RiskBand| {
        alerts
            .iter()
            .filter(|a| a.level == band.name())
            .count()
    };

    AssessmentSummary {
        total_alerts: alerts.len(),
        high_risk_count: count_level(RiskBand::High),
        medium_risk_count: count_level(RiskBand::Medium),
        low_risk_count: count_level(RiskBand::Low),
        total_risk_area_km2: alerts.iter().map(|a| a.area_km2).sum(),
    }
}

/// Run the full pipeline on one scene.
///
/// Grid shapes are validated before any computation; a mismatch fails
/// fast with [`terrarisk_core::Error::ShapeMismatch`]. An empty alert
/// list is a valid "no risk detected" result with confidence 0.0.
///
/// # Arguments
/// * `scene` - The four equal-shaped input grids
/// * `center_lat`, `center_lon` - Geographic anchor of pixel (0, 0)
/// * `issued_at` - Timestamp stamped on alerts
/// * `params` - Stage parameters
pub fn assess_risk(
    scene: &SceneGrids,
    center_lat: f64,
    center_lon: f64,
    issued_at: DateTime<Utc>,
    params: &AssessmentParams,
) -> Result<RiskAssessment> {
    scene.old_water_index.ensure_same_shape(&scene.new_water_index)?;
    scene.old_water_index.ensure_same_shape(&scene.elevation)?;
    scene.old_water_index.ensure_same_shape(&scene.rainfall)?;

    let change = detect_water_change(
        &scene.old_water_index,
        &scene.new_water_index,
        &params.water_change,
    )?;
    let slope = slope_factor(&scene.elevation, &params.slope)?;
    let rainfall = rainfall_factor(&scene.rainfall)?;

    let score = composite_risk(&change, &slope, &rainfall)?;
    let regions = extract_regions(&score, &params.regions)?;

    let projector = GeoProjector::new(center_lat, center_lon, params.km_per_pixel);
    let geojson = vectorize_regions(&regions, &projector);
    let alerts = synthesize_alerts(&geojson, issued_at);

    let confidence = if alerts.is_empty() {
        0.0
    } else {
        alerts.iter().map(|a| a.confidence).sum::<f64>() / alerts.len() as f64
    };

    let summary = summarize(&alerts);

    Ok(RiskAssessment {
        geojson,
        alerts,
        confidence,
        timestamp: issued_at,
        summary,
    })
}

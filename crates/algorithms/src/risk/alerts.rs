//! Alert synthesis from risk polygons

use super::band::RiskBand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use terrarisk_core::vector::FeatureCollection;

/// Lower and upper bounds of an alert's confidence score
const CONFIDENCE_FLOOR: f64 = 50.0;
const CONFIDENCE_CEILING: f64 = 95.0;

/// Centroid of the alerted area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Human-readable alert derived from one risk polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub level: String,
    pub title: String,
    pub description: String,
    pub area_km2: f64,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub location: AlertLocation,
}

/// Confidence for a mean risk score, bounded to [50, 95]
pub fn confidence_for(score: f64) -> f64 {
    (60.0 + (score - 40.0) * 0.7).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

fn title_for(band: Option<RiskBand>) -> &'static str {
    match band {
        Some(RiskBand::High) => "Critical Erosion Risk Detected",
        Some(RiskBand::Medium) => "Moderate Risk Area Identified",
        _ => "Low Risk Alert",
    }
}

fn description_for(band: Option<RiskBand>, location: &str, area_km2: f64) -> String {
    match band {
        Some(RiskBand::High) => format!(
            "Significant water expansion detected in {location}. Area: {area_km2:.1}km²."
        ),
        Some(RiskBand::Medium) => {
            format!("Water level changes observed in {location}. Area: {area_km2:.1}km².")
        }
        _ => format!("Minor changes detected in {location}. Area: {area_km2:.1}km²."),
    }
}

/// Synthesize one alert per feature, most severe first.
///
/// Identifiers number features in collection order (`ALERT-YYYYMMDD-NNN`),
/// so an alert keeps its id regardless of where sorting places it. The
/// final list is ordered by band severity, then by affected area
/// descending within equal severity.
///
/// # Arguments
/// * `features` - Vectorized risk polygons
/// * `issued_at` - Timestamp stamped on every alert and its id
pub fn synthesize_alerts(features: &FeatureCollection, issued_at: DateTime<Utc>) -> Vec<Alert> {
    let date_stamp = issued_at.format("%Y%m%d");

    let mut alerts: Vec<Alert> = features
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            let props = &feature.properties;
            let band = RiskBand::from_name(&props.risk_level);
            let location = format!(
                "Region ({:.2}°N, {:.2}°E)",
                props.center_lat, props.center_lon
            );

            Alert {
                id: format!("ALERT-{date_stamp}-{idx:03}"),
                level: props.risk_level.clone(),
                title: title_for(band).to_string(),
                description: description_for(band, &location, props.area_km2),
                area_km2: props.area_km2,
                confidence: confidence_for(props.risk_score),
                timestamp: issued_at,
                location: AlertLocation {
                    lat: props.center_lat,
                    lon: props.center_lon,
                },
            }
        })
        .collect();

    alerts.sort_by(|a, b| {
        let rank_a = RiskBand::from_name(&a.level).map_or(3, |band| band.rank());
        let rank_b = RiskBand::from_name(&b.level).map_or(3, |band| band.rank());
        rank_a.cmp(&rank_b).then_with(|| {
            b.area_km2
                .partial_cmp(&a.area_km2)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    alerts
}

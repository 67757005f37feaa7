//! GeoJSON feature model for vectorized risk output
//!
//! Serde models for the subset of GeoJSON the pipeline emits: polygon
//! features with typed risk properties, collected into a
//! `FeatureCollection`. Serialization produces wire-shaped GeoJSON
//! directly, no intermediate document model.

use geo_types::Polygon;
use serde::{Deserialize, Serialize};

/// GeoJSON geometry (polygons only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub type_: String,
    /// One ring per entry; each ring is a closed list of [lon, lat] pairs
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Geometry {
    /// Build a polygon geometry from a geo-types polygon
    pub fn polygon(polygon: &Polygon<f64>) -> Self {
        let exterior: Vec<[f64; 2]> = polygon
            .exterior()
            .coords()
            .map(|c| [c.x, c.y])
            .collect();

        let mut coordinates = vec![exterior];
        for interior in polygon.interiors() {
            coordinates.push(interior.coords().map(|c| [c.x, c.y]).collect());
        }

        Self {
            type_: "Polygon".to_string(),
            coordinates,
        }
    }

    /// Exterior ring coordinates as [lon, lat] pairs
    pub fn exterior(&self) -> &[[f64; 2]] {
        &self.coordinates[0]
    }
}

/// Properties attached to each risk polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProperties {
    pub risk_level: String,
    pub risk_score: f64,
    pub area_km2: f64,
    pub color: String,
    pub center_lat: f64,
    pub center_lon: f64,
}

/// A GeoJSON feature: polygon geometry plus risk properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_: String,
    pub geometry: Geometry,
    pub properties: RiskProperties,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: RiskProperties) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry,
            properties,
        }
    }
}

/// A GeoJSON feature collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

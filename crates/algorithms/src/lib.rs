//! # TerraRisk Algorithms
//!
//! Converts raster-derived environmental signals into geolocated risk
//! polygons and alerts.
//!
//! ## Pipeline stages
//!
//! - **imagery**: water indices and water-expansion detection
//! - **terrain**: slope risk factor from a DEM
//! - **risk**: rainfall factor, composite scoring, region extraction,
//!   vectorization and alert synthesis
//!
//! Data flows strictly forward: raw grids → factor grids → composite
//! score grid → labeled regions → geo-polygons → alerts. Each stage
//! produces a new value; nothing is mutated in place across stages.

pub mod imagery;
pub mod remap;
pub mod risk;
pub mod terrain;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        detect_water_change, ndwi, normalized_difference, WaterChangeParams,
    };
    pub use crate::remap::{PiecewiseLinear, Segment};
    pub use crate::risk::{
        assess_risk, composite_risk, extract_regions, rainfall_factor, synthesize_alerts,
        vectorize_regions, Alert, AssessmentParams, Connectivity, Region, RegionParams,
        RiskAssessment, RiskBand,
    };
    pub use crate::terrain::{slope_factor, SlopeFactorParams};
    pub use terrarisk_core::prelude::*;
}

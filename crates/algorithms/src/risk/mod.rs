//! Risk scoring and vectorization
//!
//! The back half of the pipeline: rainfall factor, composite risk
//! scoring, connected-region extraction, polygon vectorization and alert
//! synthesis.

mod alerts;
mod band;
mod composite;
mod pipeline;
mod rainfall;
mod regions;
mod vectorize;

pub use alerts::{confidence_for, synthesize_alerts, Alert, AlertLocation};
pub use band::RiskBand;
pub use composite::composite_risk;
pub use pipeline::{assess_risk, AssessmentParams, AssessmentSummary, RiskAssessment};
pub use rainfall::{rainfall_factor, MAX_RAINFALL_FACTOR};
pub use regions::{extract_regions, Connectivity, Region, RegionExtractor, RegionParams};
pub use vectorize::vectorize_regions;

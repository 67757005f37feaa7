//! Terrain analysis
//!
//! Slope risk factor derived from a DEM via first-difference gradients.

mod slope;

pub use slope::{slope_factor, SlopeFactor, SlopeFactorParams};

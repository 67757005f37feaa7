//! # TerraRisk Core
//!
//! Core types and I/O for the TerraRisk environmental risk library.
//!
//! This crate provides:
//! - `Grid<T>`: generic 2-D grid type for raster-derived signals
//! - `GeoProjector`: pixel index → latitude/longitude conversion
//! - GeoJSON feature model for vectorized risk output
//! - `TtlCache`: bounded cache with expiry and an injected clock
//! - `GridSource`: injectable provider of input grids
//! - Native GeoTIFF reading/writing for single-band grids

pub mod cache;
pub mod error;
pub mod io;
pub mod raster;
pub mod source;
pub mod vector;

pub use error::{Error, Result};
pub use raster::{GeoBounds, GeoProjector, Grid, GridElement, PixelBounds};
pub use source::{GridSource, SceneGrids, SceneQuery};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{GeoBounds, GeoProjector, Grid, GridElement, PixelBounds};
    pub use crate::source::{GridSource, SceneGrids, SceneQuery};
    pub use crate::vector::{Feature, FeatureCollection};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in TerraRisk.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

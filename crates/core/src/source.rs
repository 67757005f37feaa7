//! Injectable providers of analysis input grids.
//!
//! The pipeline never fetches or fabricates imagery itself. Whatever
//! produces the four input grids (a satellite scene reader, a synthetic
//! generator, fixtures in a test) implements [`GridSource`] and hands the
//! pipeline plain data.

use crate::error::Result;
use crate::raster::Grid;
use std::time::Duration;

/// Query for one analysis scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneQuery {
    /// Latitude of the grid origin
    pub center_lat: f64,
    /// Longitude of the grid origin
    pub center_lon: f64,
    /// Requested grid edge length in pixels
    pub grid_size: usize,
    /// Deadline for the provider; sources that exceed it return
    /// [`crate::Error::Timeout`]
    pub timeout: Duration,
}

impl Default for SceneQuery {
    fn default() -> Self {
        Self {
            center_lat: 26.0,
            center_lon: 92.0,
            grid_size: 50,
            timeout: Duration::from_secs(30),
        }
    }
}

/// The four equal-shaped input grids of one analysis
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGrids {
    /// Water index at the earlier acquisition
    pub old_water_index: Grid<f64>,
    /// Water index at the later acquisition
    pub new_water_index: Grid<f64>,
    /// Ground elevation in meters
    pub elevation: Grid<f64>,
    /// Accumulated precipitation in millimeters
    pub rainfall: Grid<f64>,
}

impl SceneGrids {
    /// Bundle four grids, failing fast if their shapes disagree.
    pub fn new(
        old_water_index: Grid<f64>,
        new_water_index: Grid<f64>,
        elevation: Grid<f64>,
        rainfall: Grid<f64>,
    ) -> Result<Self> {
        old_water_index.ensure_same_shape(&new_water_index)?;
        old_water_index.ensure_same_shape(&elevation)?;
        old_water_index.ensure_same_shape(&rainfall)?;

        Ok(Self {
            old_water_index,
            new_water_index,
            elevation,
            rainfall,
        })
    }

    /// Shared shape of the four grids
    pub fn shape(&self) -> (usize, usize) {
        self.old_water_index.shape()
    }
}

/// Provider of input grids for an analysis.
///
/// Implementations may hit the network, read files, or return fixtures.
/// Failure modes are `NoImagery` (nothing matched the query) and
/// `Timeout` (the deadline passed), both surfaced as errors rather than
/// partial data.
pub trait GridSource {
    fn fetch(&self, query: &SceneQuery) -> Result<SceneGrids>;
}

/// A source returning a fixed set of grids, ignoring the query.
///
/// Lets tests and embedders run the pipeline on literal data instead of
/// whatever a live provider would produce.
#[derive(Debug, Clone)]
pub struct StaticGridSource {
    grids: SceneGrids,
}

impl StaticGridSource {
    pub fn new(grids: SceneGrids) -> Self {
        Self { grids }
    }
}

impl GridSource for StaticGridSource {
    fn fetch(&self, _query: &SceneQuery) -> Result<SceneGrids> {
        Ok(self.grids.clone())
    }
}

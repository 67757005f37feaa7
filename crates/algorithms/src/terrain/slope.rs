//! Slope risk factor from a DEM
//!
//! Gradients use central first differences in the interior and one-sided
//! differences on the outermost rows/columns, scaled by the ground cell
//! size. Gradient magnitude becomes a slope angle, which a piecewise
//! remap compresses into a bounded risk factor: gentle slopes pass
//! through, steeper ones are progressively discounted, and anything over
//! 30° saturates at the factor ceiling.

use crate::remap::{PiecewiseLinear, Segment};
use ndarray::Array2;
use rayon::prelude::*;
use terrarisk_core::{Algorithm, Error, Grid, Result};

/// Upper bound of the slope risk factor
pub const MAX_SLOPE_FACTOR: f64 = 25.0;

/// Parameters for the slope factor
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeFactorParams {
    /// Ground distance between adjacent cells, in meters
    pub cell_size: f64,
}

impl Default for SlopeFactorParams {
    fn default() -> Self {
        Self { cell_size: 30.0 }
    }
}

/// Slope factor algorithm
#[derive(Debug, Clone, Default)]
pub struct SlopeFactor;

impl Algorithm for SlopeFactor {
    type Input = Grid<f64>;
    type Output = Grid<f64>;
    type Params = SlopeFactorParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "SlopeFactor"
    }

    fn description(&self) -> &'static str {
        "Convert a DEM into a bounded slope risk factor"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        slope_factor(&input, &params)
    }
}

fn slope_remap() -> PiecewiseLinear {
    // Slopes up to 5° map 1:1; 5-15° continues 1:1; 15-30° is discounted
    // to 0.67; beyond 30° the factor saturates.
    PiecewiseLinear::new(
        vec![
            Segment::new(0.0, 0.0, 1.0),
            Segment::new(5.0, 5.0, 1.0),
            Segment::new(15.0, 15.0, 0.67),
            Segment::new(30.0, MAX_SLOPE_FACTOR, 0.0),
        ],
        0.0,
        MAX_SLOPE_FACTOR,
    )
    .expect("static breakpoints are valid")
}

/// One-dimensional first difference along a line of cells.
///
/// Central difference in the interior, forward/backward at the ends.
/// Lines shorter than two cells have zero gradient.
#[inline]
fn first_difference(prev: f64, next: f64, spacing: f64) -> f64 {
    (next - prev) / spacing
}

/// Compute the slope risk factor for a DEM.
///
/// # Arguments
/// * `elevation` - DEM with cell values in meters
/// * `params` - Ground cell size
///
/// # Returns
/// Grid with factor values in [0, 25]
pub fn slope_factor(elevation: &Grid<f64>, params: &SlopeFactorParams) -> Result<Grid<f64>> {
    if params.cell_size <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "cell_size",
            value: params.cell_size.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    let (rows, cols) = elevation.shape();
    let h = params.cell_size;
    let remap = slope_remap();

    let output_data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];

            for col in 0..cols {
                let z = |r: usize, c: usize| unsafe { elevation.get_unchecked(r, c) };

                let gy = if rows < 2 {
                    0.0
                } else if row == 0 {
                    first_difference(z(0, col), z(1, col), h)
                } else if row == rows - 1 {
                    first_difference(z(rows - 2, col), z(rows - 1, col), h)
                } else {
                    first_difference(z(row - 1, col), z(row + 1, col), 2.0 * h)
                };

                let gx = if cols < 2 {
                    0.0
                } else if col == 0 {
                    first_difference(z(row, 0), z(row, 1), h)
                } else if col == cols - 1 {
                    first_difference(z(row, cols - 2), z(row, cols - 1), h)
                } else {
                    first_difference(z(row, col - 1), z(row, col + 1), 2.0 * h)
                };

                let slope_degrees = (gx * gx + gy * gy).sqrt().atan().to_degrees();
                row_data[col] = remap.eval(slope_degrees);
            }

            row_data
        })
        .collect();

    let array = Array2::from_shape_vec((rows, cols), output_data)
        .map_err(|e| Error::Other(e.to_string()))?;
    Ok(Grid::from_array(array))
}

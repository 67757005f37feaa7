//! Water-expansion detection between two water-index grids

use rayon::prelude::*;
use terrarisk_core::{Grid, Result};

/// Parameters for water-change detection
#[derive(Debug, Clone, PartialEq)]
pub struct WaterChangeParams {
    /// Minimum index increase for a cell to count as expansion
    pub threshold: f64,
    /// Minimum current index for a cell to count as wet at all
    pub min_water_index: f64,
}

impl Default for WaterChangeParams {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            min_water_index: 0.3,
        }
    }
}

/// Detect cells where surface water has expanded.
///
/// A cell is flagged iff the index rose by strictly more than
/// `threshold` AND the new index strictly exceeds `min_water_index`.
/// Both comparisons are exclusive: a change of exactly the threshold is
/// not expansion.
///
/// # Arguments
/// * `old_index` - Water index at the earlier acquisition
/// * `new_index` - Water index at the later acquisition
/// * `params` - Detection thresholds
///
/// # Returns
/// Boolean mask, same shape as the inputs
pub fn detect_water_change(
    old_index: &Grid<f64>,
    new_index: &Grid<f64>,
    params: &WaterChangeParams,
) -> Result<Grid<bool>> {
    old_index.ensure_same_shape(new_index)?;

    let (rows, cols) = old_index.shape();
    let threshold = params.threshold;
    let min_water = params.min_water_index;

    let data: Vec<bool> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![false; cols];
            for col in 0..cols {
                let old = unsafe { old_index.get_unchecked(row, col) };
                let new = unsafe { new_index.get_unchecked(row, col) };

                row_data[col] = (new - old) > threshold && new > min_water;
            }
            row_data
        })
        .collect();

    Grid::from_vec(data, rows, cols)
}

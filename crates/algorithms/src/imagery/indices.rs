//! Spectral water indices
//!
//! Computed from single-band grids (one band per grid). A zero band sum
//! yields index 0.0 rather than a NaN hole, so downstream thresholds see
//! a defined neutral value.

use rayon::prelude::*;
use terrarisk_core::{Grid, Result};

/// Compute the normalized difference between two bands:
///
/// `(band_a - band_b) / (band_a + band_b)`
///
/// Result is in the range [-1, 1]. Cells where the band sum is zero
/// produce 0.0.
///
/// # Arguments
/// * `band_a` - Numerator positive band
/// * `band_b` - Numerator negative band
pub fn normalized_difference(band_a: &Grid<f64>, band_b: &Grid<f64>) -> Result<Grid<f64>> {
    band_a.ensure_same_shape(band_b)?;

    let (rows, cols) = band_a.shape();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];
            for col in 0..cols {
                let a = unsafe { band_a.get_unchecked(row, col) };
                let b = unsafe { band_b.get_unchecked(row, col) };

                let sum = a + b;
                if sum.abs() < 1e-10 {
                    continue;
                }

                row_data[col] = (a - b) / sum;
            }
            row_data
        })
        .collect();

    Grid::from_vec(data, rows, cols)
}

/// Normalized Difference Water Index (McFeeters, 1996)
///
/// `NDWI = (Green - NIR) / (Green + NIR)`
///
/// Positive values indicate water bodies.
///
/// # Arguments
/// * `green` - Green band
/// * `nir` - Near-infrared band
pub fn ndwi(green: &Grid<f64>, nir: &Grid<f64>) -> Result<Grid<f64>> {
    normalized_difference(green, nir)
}

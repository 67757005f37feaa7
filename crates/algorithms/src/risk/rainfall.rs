//! Rainfall risk factor

use crate::remap::{PiecewiseLinear, Segment};
use ndarray::Array2;
use rayon::prelude::*;
use terrarisk_core::{Error, Grid, Result};

/// Upper bound of the rainfall risk factor
pub const MAX_RAINFALL_FACTOR: f64 = 15.0;

fn rainfall_remap() -> PiecewiseLinear {
    // Light rain contributes little; the factor steepens through the
    // 50-150 mm band and flattens out toward the ceiling.
    PiecewiseLinear::new(
        vec![
            Segment::new(0.0, 0.0, 3.0 / 50.0),
            Segment::new(50.0, 3.0, 5.0 / 100.0),
            Segment::new(150.0, 8.0, 4.0 / 150.0),
            Segment::new(300.0, 12.0, 1.0 / 100.0),
        ],
        0.0,
        MAX_RAINFALL_FACTOR,
    )
    .expect("static breakpoints are valid")
}

/// Convert accumulated precipitation (mm) into a bounded risk factor.
///
/// # Arguments
/// * `rainfall` - Precipitation grid in millimeters
///
/// # Returns
/// Grid with factor values in [0, 15]
pub fn rainfall_factor(rainfall: &Grid<f64>) -> Result<Grid<f64>> {
    let (rows, cols) = rainfall.shape();
    let remap = rainfall_remap();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];
            for col in 0..cols {
                let r = unsafe { rainfall.get_unchecked(row, col) };
                row_data[col] = remap.eval(r);
            }
            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Grid::from_array(array))
}

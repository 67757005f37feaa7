//! Composite risk scoring
//!
//! Combines the water-expansion mask with the slope and rainfall factors
//! into one score grid. Flagged cells start from a fixed base score and
//! add their local factors. Every cell then receives a proximity bonus
//! driven by the 3×3 neighborhood maximum of the mask, so unflagged
//! cells bordering an expansion cluster still score above zero and the
//! resulting polygons have no speckled gaps.

use rayon::prelude::*;
use terrarisk_core::{Error, Grid, Result};
use ndarray::Array2;

/// Score granted to every flagged cell before factors apply
pub const BASE_SCORE: f64 = 50.0;

/// Weight of the neighborhood proximity bonus
pub const PROXIMITY_WEIGHT: f64 = 10.0;

/// Combine change mask and factor grids into a risk score grid.
///
/// Flagged cells score `50 + slope + rainfall`. All cells additionally
/// gain `(max3x3(mask) - mask) * 10`, where the window is clamped to the
/// grid at the borders. The result is clamped to [0, 100].
///
/// # Arguments
/// * `change_mask` - Water-expansion mask
/// * `slope` - Slope factor grid, values in [0, 25]
/// * `rainfall` - Rainfall factor grid, values in [0, 15]
///
/// # Returns
/// Score grid with values in [0, 100]
pub fn composite_risk(
    change_mask: &Grid<bool>,
    slope: &Grid<f64>,
    rainfall: &Grid<f64>,
) -> Result<Grid<f64>> {
    change_mask.ensure_same_shape(slope)?;
    change_mask.ensure_same_shape(rainfall)?;

    let (rows, cols) = change_mask.shape();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];

            for col in 0..cols {
                let flagged = unsafe { change_mask.get_unchecked(row, col) };

                let mut score = if flagged {
                    let s = unsafe { slope.get_unchecked(row, col) };
                    let r = unsafe { rainfall.get_unchecked(row, col) };
                    BASE_SCORE + s + r
                } else {
                    0.0
                };

                let mut neighborhood_flagged = false;
                'window: for dr in -1isize..=1 {
                    for dc in -1isize..=1 {
                        let nr = row as isize + dr;
                        let nc = col as isize + dc;
                        if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                            continue;
                        }
                        if unsafe { change_mask.get_unchecked(nr as usize, nc as usize) } {
                            neighborhood_flagged = true;
                            break 'window;
                        }
                    }
                }

                let window_max = if neighborhood_flagged { 1.0 } else { 0.0 };
                let own = if flagged { 1.0 } else { 0.0 };
                score += (window_max - own) * PROXIMITY_WEIGHT;

                row_data[col] = score.clamp(0.0, 100.0);
            }

            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Grid::from_array(array))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_flagged_grid() {
        // Everything flagged: no proximity bonus anywhere
        let mask = Grid::filled(10, 10, true);
        let slope = Grid::filled(10, 10, 5.0);
        let rainfall = Grid::filled(10, 10, 3.0);

        let score = composite_risk(&mask, &slope, &rainfall).unwrap();
        for &v in score.iter() {
            assert_relative_eq!(v, 58.0);
        }
    }

    #[test]
    fn test_unflagged_grid_is_zero() {
        let mask = Grid::filled(6, 6, false);
        let slope = Grid::filled(6, 6, 25.0);
        let rainfall = Grid::filled(6, 6, 15.0);

        let score = composite_risk(&mask, &slope, &rainfall).unwrap();
        assert!(score.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_proximity_bonus_around_isolated_cell() {
        let mut mask = Grid::filled(5, 5, false);
        mask.set(2, 2, true).unwrap();
        let slope = Grid::filled(5, 5, 4.0);
        let rainfall = Grid::filled(5, 5, 6.0);

        let score = composite_risk(&mask, &slope, &rainfall).unwrap();

        // The flagged cell gets base + factors, no bonus
        assert_relative_eq!(score.get(2, 2).unwrap(), 60.0);
        // All eight neighbors get only the bonus
        for (r, c) in [
            (1, 1), (1, 2), (1, 3),
            (2, 1),         (2, 3),
            (3, 1), (3, 2), (3, 3),
        ] {
            assert_relative_eq!(score.get(r, c).unwrap(), 10.0);
        }
        // Cells two steps away see nothing
        assert_relative_eq!(score.get(0, 0).unwrap(), 0.0);
        assert_relative_eq!(score.get(4, 4).unwrap(), 0.0);
    }

    #[test]
    fn test_bonus_reaches_grid_corner() {
        // Flagged cell adjacent to the corner: the clamped window still
        // lets the corner cell see it
        let mut mask = Grid::filled(4, 4, false);
        mask.set(1, 1, true).unwrap();
        let zeros = Grid::filled(4, 4, 0.0);

        let score = composite_risk(&mask, &zeros, &zeros).unwrap();
        assert_relative_eq!(score.get(0, 0).unwrap(), 10.0);
    }

    #[test]
    fn test_scores_clamped_to_range() {
        let mask = Grid::from_fn(12, 12, |r, c| (r + c) % 3 == 0);
        let slope = Grid::filled(12, 12, 25.0);
        let rainfall = Grid::filled(12, 12, 15.0);

        let score = composite_risk(&mask, &slope, &rainfall).unwrap();
        for &v in score.iter() {
            assert!((0.0..=100.0).contains(&v), "score {v} out of range");
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let mask = Grid::filled(5, 5, true);
        let slope = Grid::filled(5, 4, 1.0);
        let rainfall = Grid::filled(5, 5, 1.0);

        assert!(composite_risk(&mask, &slope, &rainfall).is_err());
    }
}

//! Connected-region extraction from the risk score grid
//!
//! For each severity band, the score grid is thresholded into a mask and
//! its connected components labeled with a breadth-first scan. Components
//! below the minimum pixel area are dropped. Each surviving region keeps
//! its half-open bounding box, pixel count and mean score.

use super::band::RiskBand;
use std::collections::VecDeque;
use terrarisk_core::{Algorithm, Error, Grid, PixelBounds, Result};

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const NEIGHBORS_4: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Cell adjacency used when labeling components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Edges and corners (queen adjacency)
    #[default]
    Eight,
    /// Edges only (rook adjacency)
    Four,
}

impl Connectivity {
    fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Eight => &NEIGHBORS_8,
            Connectivity::Four => &NEIGHBORS_4,
        }
    }
}

/// Parameters for region extraction
#[derive(Debug, Clone, PartialEq)]
pub struct RegionParams {
    /// Components with fewer pixels than this are discarded
    pub min_area: usize,
    /// Adjacency rule for component labeling
    pub connectivity: Connectivity,
}

impl Default for RegionParams {
    fn default() -> Self {
        Self {
            min_area: 3,
            connectivity: Connectivity::Eight,
        }
    }
}

/// A connected set of same-band cells in the score grid
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Severity band every member cell falls in
    pub band: RiskBand,
    /// Half-open pixel bounding box
    pub bounds: PixelBounds,
    /// Number of member cells
    pub area_px: usize,
    /// Mean risk score over member cells
    pub mean_score: f64,
}

/// Region extraction algorithm
#[derive(Debug, Clone, Default)]
pub struct RegionExtractor;

impl Algorithm for RegionExtractor {
    type Input = Grid<f64>;
    type Output = Vec<Region>;
    type Params = RegionParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "RegionExtractor"
    }

    fn description(&self) -> &'static str {
        "Label connected same-band components of a risk score grid"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        extract_regions(&input, &params)
    }
}

/// Extract connected regions from a risk score grid.
///
/// Bands are processed in descending severity (HIGH, MEDIUM, LOW), and
/// the returned regions keep that order. Within a band, regions appear
/// in raster-scan order of their first cell; downstream sorting imposes
/// the final alert order.
///
/// # Arguments
/// * `score` - Risk score grid, values in [0, 100]
/// * `params` - Minimum area and connectivity
pub fn extract_regions(score: &Grid<f64>, params: &RegionParams) -> Result<Vec<Region>> {
    if params.min_area == 0 {
        return Err(Error::InvalidParameter {
            name: "min_area",
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let (rows, cols) = score.shape();
    let offsets = params.connectivity.offsets();
    let mut regions = Vec::new();

    for band in RiskBand::ALL {
        let mut visited = Grid::<bool>::new(rows, cols);
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

        for start_row in 0..rows {
            for start_col in 0..cols {
                if visited.get(start_row, start_col)? {
                    continue;
                }
                let v = unsafe { score.get_unchecked(start_row, start_col) };
                if !band.contains(v) {
                    continue;
                }

                // Flood this component
                visited.set(start_row, start_col, true)?;
                queue.push_back((start_row, start_col));

                let mut min_row = start_row;
                let mut max_row = start_row;
                let mut min_col = start_col;
                let mut max_col = start_col;
                let mut area = 0usize;
                let mut score_sum = 0.0;

                while let Some((row, col)) = queue.pop_front() {
                    area += 1;
                    score_sum += unsafe { score.get_unchecked(row, col) };
                    min_row = min_row.min(row);
                    max_row = max_row.max(row);
                    min_col = min_col.min(col);
                    max_col = max_col.max(col);

                    for &(dr, dc) in offsets {
                        let nr = row as isize + dr;
                        let nc = col as isize + dc;
                        if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                            continue;
                        }
                        let (nr, nc) = (nr as usize, nc as usize);
                        if visited.get(nr, nc)? {
                            continue;
                        }
                        let nv = unsafe { score.get_unchecked(nr, nc) };
                        if band.contains(nv) {
                            visited.set(nr, nc, true)?;
                            queue.push_back((nr, nc));
                        }
                    }
                }

                if area < params.min_area {
                    continue;
                }

                regions.push(Region {
                    band,
                    bounds: PixelBounds::new(min_row, min_col, max_row + 1, max_col + 1),
                    area_px: area,
                    mean_score: score_sum / area as f64,
                });
            }
        }
    }

    Ok(regions)
}

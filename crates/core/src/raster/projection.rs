//! Pixel index → latitude/longitude conversion
//!
//! The analysis grid is anchored at a center point, with row index growing
//! southward and column index growing eastward at a fixed kilometer-per-pixel
//! scale. Degrees are derived with the small-area approximation of 111 km
//! per degree.

use geo_types::{LineString, Polygon};
use serde::{Deserialize, Serialize};

/// Kilometers per degree of latitude (and of longitude, in this
/// small-area approximation).
pub const KM_PER_DEGREE: f64 = 111.0;

/// Half-open pixel bounding box of a grid region.
///
/// `max_row` and `max_col` are exclusive: a region occupying rows 0..=9
/// has `min_row = 0, max_row = 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBounds {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl PixelBounds {
    pub fn new(min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> Self {
        Self {
            min_row,
            min_col,
            max_row,
            max_col,
        }
    }

    /// Number of rows covered
    pub fn height(&self) -> usize {
        self.max_row - self.min_row
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        self.max_col - self.min_col
    }
}

/// Geographic bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    /// Closed 5-point rectangular ring, counter-clockwise from the
    /// south-west corner.
    pub fn ring(&self) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (self.lon_min, self.lat_min),
                (self.lon_max, self.lat_min),
                (self.lon_max, self.lat_max),
                (self.lon_min, self.lat_max),
                (self.lon_min, self.lat_min),
            ]),
            vec![],
        )
    }

    /// Midpoint of the box as (lat, lon)
    pub fn centroid(&self) -> (f64, f64) {
        (
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }
}

/// Converts pixel bounding boxes to geographic ones.
///
/// Row 0 / column 0 sit at the center point; rows run south, columns run
/// east. One pixel spans `km_per_pixel / 111` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoProjector {
    /// Latitude of the grid origin
    pub center_lat: f64,
    /// Longitude of the grid origin
    pub center_lon: f64,
    /// Ground distance covered by one pixel, in kilometers
    pub km_per_pixel: f64,
}

impl GeoProjector {
    pub fn new(center_lat: f64, center_lon: f64, km_per_pixel: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            km_per_pixel,
        }
    }

    /// Degrees spanned by one pixel
    pub fn deg_per_pixel(&self) -> f64 {
        self.km_per_pixel / KM_PER_DEGREE
    }

    /// Ground area of one pixel in km²
    pub fn km2_per_pixel(&self) -> f64 {
        self.km_per_pixel * self.km_per_pixel
    }

    /// Convert a pixel bounding box to a geographic bounding box
    pub fn project_bounds(&self, bounds: &PixelBounds) -> GeoBounds {
        let d = self.deg_per_pixel();
        GeoBounds {
            lat_max: self.center_lat - bounds.min_row as f64 * d,
            lat_min: self.center_lat - bounds.max_row as f64 * d,
            lon_min: self.center_lon + bounds.min_col as f64 * d,
            lon_max: self.center_lon + bounds.max_col as f64 * d,
        }
    }
}

impl Default for GeoProjector {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

//! Grid container and pixel→geographic conversion

mod element;
mod grid;
mod projection;

pub use element::GridElement;
pub use grid::Grid;
pub use projection::{GeoBounds, GeoProjector, PixelBounds, KM_PER_DEGREE};

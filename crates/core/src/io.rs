//! Native single-band TIFF reading/writing for grids
//!
//! Uses the `tiff` crate directly. Reads any common pixel depth into a
//! `Grid<f64>`; writes 32-bit float. Geographic placement is supplied
//! separately through [`crate::GeoProjector`], so no geo tags are
//! consulted here.

use crate::error::{Error, Result};
use crate::raster::Grid;
use std::fs::File;
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::colortype::Gray32Float;
use tiff::encoder::TiffEncoder;

/// Read a single-band TIFF file into a `Grid<f64>`
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid<f64>> {
    let file = File::open(path.as_ref())?;
    let mut decoder =
        Decoder::new(file).map_err(|e| Error::Other(format!("TIFF decode error: {e}")))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| Error::Other(format!("Cannot read TIFF dimensions: {e}")))?;

    let rows = height as usize;
    let cols = width as usize;

    let result = decoder
        .read_image()
        .map_err(|e| Error::Other(format!("Cannot read TIFF data: {e}")))?;

    let data: Vec<f64> = match result {
        DecodingResult::F64(buf) => buf,
        DecodingResult::F32(buf) => buf.iter().map(|&v| v as f64).collect(),
        DecodingResult::U8(buf) => buf.iter().map(|&v| v as f64).collect(),
        DecodingResult::U16(buf) => buf.iter().map(|&v| v as f64).collect(),
        DecodingResult::U32(buf) => buf.iter().map(|&v| v as f64).collect(),
        DecodingResult::I8(buf) => buf.iter().map(|&v| v as f64).collect(),
        DecodingResult::I16(buf) => buf.iter().map(|&v| v as f64).collect(),
        DecodingResult::I32(buf) => buf.iter().map(|&v| v as f64).collect(),
        _ => {
            return Err(Error::Other(
                "Unsupported TIFF pixel format".to_string(),
            ))
        }
    };

    if data.len() != rows * cols {
        return Err(Error::InvalidDimensions { rows, cols });
    }

    Grid::from_vec(data, rows, cols)
}

/// Write a `Grid<f64>` as a single-band 32-bit float TIFF file
pub fn write_grid<P: AsRef<Path>>(grid: &Grid<f64>, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut encoder =
        TiffEncoder::new(file).map_err(|e| Error::Other(format!("TIFF encode error: {e}")))?;

    let data: Vec<f32> = grid.iter().map(|&v| v as f32).collect();

    encoder
        .write_image::<Gray32Float>(grid.cols() as u32, grid.rows() as u32, &data)
        .map_err(|e| Error::Other(format!("Cannot write TIFF data: {e}")))?;

    Ok(())
}

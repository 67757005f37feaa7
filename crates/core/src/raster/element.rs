//! Grid element trait for generic cell values

use std::fmt::Debug;

/// Trait for types that can be stored in a grid cell.
///
/// Covers the three cell kinds the pipeline works with: floating-point
/// signal values, boolean masks, and integer component labels. `Default`
/// supplies the fill value for freshly allocated grids (0, false, 0.0).
pub trait GridElement:
    Copy + Clone + Debug + PartialEq + Default + Send + Sync + 'static
{
}

impl GridElement for bool {}
impl GridElement for u8 {}
impl GridElement for u16 {}
impl GridElement for u32 {}
impl GridElement for u64 {}
impl GridElement for i16 {}
impl GridElement for i32 {}
impl GridElement for i64 {}
impl GridElement for f32 {}
impl GridElement for f64 {}

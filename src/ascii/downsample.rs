//! Block-averaging a surface into a grid of sampled cells.

use serde::Serialize;

use super::luminance::relative_luminance;
use crate::error::{Error, Result};
use crate::surface::{Context2d, Surface};

/// Default bound on the longer side of the sampled grid, in cells.
pub const DEFAULT_GRID_SIZE: u32 = 100;

/// Averaged color and luminance of one sampled block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampledCell {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    /// Relative luminance in `[0, 1]`
    pub luminance: f64,
}

impl SampledCell {
    /// Build a cell from averaged channels, computing its luminance.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            luminance: relative_luminance(r, g, b),
        }
    }
}

/// Row-major grid of sampled cells. All rows have the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledGrid {
    cells: Vec<SampledCell>,
    cols: usize,
    rows: usize,
}

impl SampledGrid {
    /// Number of cells per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&SampledCell> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// All cells in scan order.
    pub fn cells(&self) -> &[SampledCell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[SampledCell]> {
        self.cells.chunks(self.cols.max(1))
    }
}

/// Side length in pixels of the square block averaged into one cell.
///
/// `unit = floor(max(width, height) / grid_size)`.
///
/// # Errors
/// - [`Error::InvalidGridSize`] when `grid_size` is 0
/// - [`Error::InvalidSize`] when the unit would be smaller than one pixel
pub fn sampling_unit(width: u32, height: u32, grid_size: u32) -> Result<u32> {
    if grid_size == 0 {
        return Err(Error::InvalidGridSize);
    }
    let unit = width.max(height) / grid_size;
    if unit < 1 {
        return Err(Error::InvalidSize {
            width,
            height,
            grid_size,
        });
    }
    Ok(unit)
}

/// Downsample a surface into a grid of averaged cells.
///
/// The surface is scanned in non-overlapping `unit × unit` blocks starting
/// at the top-left corner. Blocks that would extend past the right or
/// bottom edge are dropped, not clipped. Each channel is averaged with
/// integer truncation over the `unit²` pixels of its block.
///
/// Every call re-reads the surface.
///
/// # Arguments
/// * `surface` - Surface to read pixels from
/// * `ctx` - Drawing context of that surface
/// * `grid_size` - Bound on the longer side of the grid, in cells
pub fn sample<S>(surface: &S, ctx: &Context2d, grid_size: u32) -> Result<SampledGrid>
where
    S: Surface + ?Sized,
{
    let width = surface.width();
    let height = surface.height();
    let unit = sampling_unit(width, height, grid_size)?;

    let cols = (width / unit) as usize;
    let rows = (height / unit) as usize;
    log::debug!(
        "sampling {}x{} surface with unit {} into {}x{} cells",
        width,
        height,
        unit,
        cols,
        rows
    );

    if cols == 0 || rows == 0 {
        return Ok(SampledGrid::default());
    }

    let block_area = u64::from(unit) * u64::from(unit);
    let mut cells = Vec::with_capacity(cols * rows);

    for row in 0..rows as u32 {
        for col in 0..cols as u32 {
            let data = surface.get_image_data(ctx, col * unit, row * unit, unit, unit);

            let mut sums = [0u64; 4];
            for rgba in data.chunks_exact(4) {
                for (sum, &channel) in sums.iter_mut().zip(rgba) {
                    *sum += u64::from(channel);
                }
            }

            let [r, g, b, a] = sums.map(|sum| (sum / block_area) as u8);
            cells.push(SampledCell::new(r, g, b, a));
        }
    }

    Ok(SampledGrid { cells, cols, rows })
}

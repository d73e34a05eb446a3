//! Re-rendering sampled grids as bitmaps of text glyphs.

use image::Rgba;

use super::charset::Charset;
use super::downsample::{SampledGrid, DEFAULT_GRID_SIZE};
use super::mapping::{glyph_cycle_index, grayscale_glyph, FALLBACK_GLYPH};
use crate::error::{Error, Result};
use crate::surface::{has_glyph, Canvas, Surface, TextStyle};

/// Default glyph font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 10;

/// Upper bound on the pixel count of a glyph image (256 MiB of RGBA).
pub const MAX_GLYPH_IMAGE_PIXELS: u64 = 1 << 26;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Options for the glyph-image renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphOptions {
    /// Bound on the longer side of the grid, in cells. Default: 100
    pub grid_size: u32,
    /// Glyphs to render with. Default: `@` for colored output, the
    /// monochrome ramp for grayscale output
    pub charset: Option<Charset>,
    /// Font size in pixels. Default: 10
    pub font_size: u32,
    /// Extra pixels between neighbouring cells. Default: 0
    pub gap: u32,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            charset: None,
            font_size: DEFAULT_FONT_SIZE,
            gap: 0,
        }
    }
}

/// Allocate the output canvas; returns it with the cell pitch.
fn glyph_canvas(grid: &SampledGrid, font_size: u32, gap: u32) -> Result<(Canvas, u32)> {
    if font_size == 0 {
        return Err(Error::InvalidFontSize);
    }
    let pitch = u64::from(font_size) + u64::from(gap);
    let width = (grid.cols() as u64).checked_mul(pitch);
    let height = (grid.rows() as u64).checked_mul(pitch);
    let too_large = || Error::GlyphImageTooLarge {
        width: width.unwrap_or(u64::MAX),
        height: height.unwrap_or(u64::MAX),
        max: MAX_GLYPH_IMAGE_PIXELS,
    };

    let (Some(w), Some(h)) = (width, height) else {
        return Err(too_large());
    };
    match w.checked_mul(h) {
        Some(pixels) if pixels <= MAX_GLYPH_IMAGE_PIXELS => {}
        _ => return Err(too_large()),
    }
    // A single row or column can still outgrow the bitmap's u32 sides
    let (Ok(w), Ok(h), Ok(pitch)) = (u32::try_from(w), u32::try_from(h), u32::try_from(pitch))
    else {
        return Err(too_large());
    };
    Ok((Canvas::new(w, h), pitch))
}

/// Reject charsets with glyphs the built-in fonts would draw as the
/// replacement glyph.
fn check_drawable(charset: &Charset) -> Result<()> {
    match charset.as_slice().iter().find(|&&glyph| !has_glyph(glyph)) {
        Some(&glyph) => Err(Error::UnsupportedGlyph(glyph)),
        None => Ok(()),
    }
}

/// Cell origin: left edge and baseline.
fn glyph_origin(row: usize, col: usize, pitch: u32, font_size: u32) -> (i32, i32) {
    let pitch = i64::from(pitch);
    let x = col as i64 * pitch;
    let y = row as i64 * pitch + i64::from(font_size);
    (
        i32::try_from(x).unwrap_or(i32::MAX),
        i32::try_from(y).unwrap_or(i32::MAX),
    )
}

/// Draw each cell's grayscale glyph in solid black.
///
/// The canvas measures `cols * (font_size + gap)` by
/// `rows * (font_size + gap)`; the glyph of cell `(row, col)` sits at
/// `(col * pitch, row * pitch + font_size)` on the alphabetic baseline.
///
/// # Errors
/// - [`Error::UnsupportedGlyph`] when the charset is not printable ASCII
/// - [`Error::InvalidFontSize`] when `font_size` is 0
/// - [`Error::GlyphImageTooLarge`] past [`MAX_GLYPH_IMAGE_PIXELS`]
pub fn grayscale_glyphs(
    grid: &SampledGrid,
    charset: &Charset,
    font_size: u32,
    gap: u32,
) -> Result<Canvas> {
    check_drawable(charset)?;
    let (mut canvas, pitch) = glyph_canvas(grid, font_size, gap)?;
    let ctx = canvas.context();
    let style = TextStyle::new(font_size, BLACK);

    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let glyph = grayscale_glyph(cell.luminance, charset);
            let (x, y) = glyph_origin(row, col, pitch, font_size);
            canvas.fill_text(&ctx, glyph, x, y, &style);
        }
    }

    Ok(canvas)
}

/// Draw each cell's glyph filled with the cell's RGBA color.
///
/// Same geometry and errors as [`grayscale_glyphs`]. The glyph index is
/// `(row * row_width + col) % charset.len()`.
pub fn colored_glyphs(
    grid: &SampledGrid,
    charset: &Charset,
    row_width: usize,
    font_size: u32,
    gap: u32,
) -> Result<Canvas> {
    check_drawable(charset)?;
    let (mut canvas, pitch) = glyph_canvas(grid, font_size, gap)?;
    let ctx = canvas.context();

    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let glyph = charset
                .get(glyph_cycle_index(row, col, row_width, charset.len()))
                .unwrap_or(FALLBACK_GLYPH);
            let style = TextStyle::new(font_size, Rgba([cell.r, cell.g, cell.b, cell.a]));
            let (x, y) = glyph_origin(row, col, pitch, font_size);
            canvas.fill_text(&ctx, glyph, x, y, &style);
        }
    }

    Ok(canvas)
}

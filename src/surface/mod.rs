//! Drawing surface abstraction.
//!
//! The renderer only needs a handful of capabilities from a 2D surface:
//! reading pixel blocks, clearing, drawing single glyphs and compositing
//! images. [`Surface`] captures that contract; [`Canvas`] is the in-memory
//! implementation backed by an RGBA bitmap.

mod canvas;
mod glyph;

pub use canvas::Canvas;
pub use glyph::{font_for_size, has_glyph};

use image::{Rgba, RgbaImage};

/// Color space used when reading pixel data back from a surface.
///
/// Only sRGB is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    #[default]
    Srgb,
}

/// Vertical anchor for text drawn with [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// `y` is the glyph baseline
    #[default]
    Alphabetic,
    /// `y` is the top edge of the glyph cell
    Top,
}

/// Drawing context attributes of a surface.
///
/// Obtained once from [`Surface::context`] and passed back into the
/// read/draw operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context2d {
    pub color_space: ColorSpace,
    pub text_baseline: TextBaseline,
}

/// Fill style for a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size in pixels; a fixed-width face is always used
    pub font_size: u32,
    /// Fill color (straight alpha)
    pub color: Rgba<u8>,
}

impl TextStyle {
    pub fn new(font_size: u32, color: Rgba<u8>) -> Self {
        Self { font_size, color }
    }
}

/// A 2D drawing surface the renderer can sample from and draw into.
pub trait Surface {
    /// Identifier used when attaching the surface to a container.
    fn id(&self) -> &str;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Change the surface dimensions. Pixel content is discarded.
    fn set_size(&mut self, width: u32, height: u32);

    /// Create the drawing context for this surface.
    fn context(&self) -> Context2d;

    /// Check that the surface honours its own contract.
    ///
    /// Returns a description of the problem when it does not. [`Canvas`]
    /// always passes; foreign surfaces override this.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Read a block of pixels as straight RGBA bytes in row-major order.
    ///
    /// Pixels outside the surface read as transparent black.
    fn get_image_data(&self, ctx: &Context2d, x: u32, y: u32, width: u32, height: u32) -> Vec<u8>;

    /// Reset a rectangle to transparent black.
    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32);

    /// Draw a single glyph anchored at `(x, y)` according to the context baseline.
    fn fill_text(&mut self, ctx: &Context2d, glyph: char, x: i32, y: i32, style: &TextStyle);

    /// Composite `image` with its top-left corner at `(dx, dy)`.
    fn draw_image(&mut self, image: &RgbaImage, dx: i64, dy: i64);

    /// Composite `image` scaled to `dw × dh` with its top-left corner at `(dx, dy)`.
    fn draw_image_scaled(&mut self, image: &RgbaImage, dx: i64, dy: i64, dw: u32, dh: u32);
}

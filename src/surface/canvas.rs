//! In-memory RGBA canvas.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use super::glyph::draw_glyph;
use super::{Context2d, Surface, TextStyle};
use crate::error::{Error, Result};

static NEXT_CANVAS_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> String {
    format!(
        "ascii-art-canvas-{}",
        NEXT_CANVAS_ID.fetch_add(1, Ordering::Relaxed)
    )
}

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// An RGBA bitmap implementing [`Surface`].
#[derive(Debug, Clone)]
pub struct Canvas {
    id: String,
    image: RgbaImage,
}

impl Canvas {
    /// Width of a canvas created without explicit dimensions.
    pub const DEFAULT_WIDTH: u32 = 300;
    /// Height of a canvas created without explicit dimensions.
    pub const DEFAULT_HEIGHT: u32 = 150;

    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    /// Wrap an existing bitmap.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            id: next_id(),
            image,
        }
    }

    /// Build a canvas from straight RGBA bytes (4 per pixel, row-major).
    ///
    /// Fails with [`Error::InvalidSurface`] when `data` does not hold exactly
    /// `width * height` pixels.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        RgbaImage::from_raw(width, height, data)
            .filter(|_| actual == expected)
            .map(Self::from_image)
            .ok_or_else(|| {
                Error::InvalidSurface(format!(
                    "expected {} bytes for a {}x{} RGBA bitmap, got {}",
                    expected, width, height, actual
                ))
            })
    }

    /// Decode an image file into a canvas.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self::from_image(image))
    }

    /// Encode the canvas as a PNG file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Overwrite a rectangle with `color`, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
        let x_end = x.saturating_add(width).min(self.image.width());
        let y_end = y.saturating_add(height).min(self.image.height());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl From<RgbaImage> for Canvas {
    fn from(image: RgbaImage) -> Self {
        Self::from_image(image)
    }
}

impl Surface for Canvas {
    fn id(&self) -> &str {
        &self.id
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }

    fn context(&self) -> Context2d {
        Context2d::default()
    }

    fn get_image_data(&self, _ctx: &Context2d, x: u32, y: u32, width: u32, height: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for py in 0..height {
            for px in 0..width {
                let pixel = x
                    .checked_add(px)
                    .zip(y.checked_add(py))
                    .and_then(|(sx, sy)| self.image.get_pixel_checked(sx, sy))
                    .copied()
                    .unwrap_or(TRANSPARENT);
                data.extend_from_slice(&pixel.0);
            }
        }
        data
    }

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.fill_rect(x, y, width, height, TRANSPARENT);
    }

    fn fill_text(&mut self, ctx: &Context2d, glyph: char, x: i32, y: i32, style: &TextStyle) {
        draw_glyph(&mut self.image, glyph, x, y, ctx.text_baseline, style);
    }

    fn draw_image(&mut self, image: &RgbaImage, dx: i64, dy: i64) {
        imageops::overlay(&mut self.image, image, dx, dy);
    }

    fn draw_image_scaled(&mut self, image: &RgbaImage, dx: i64, dy: i64, dw: u32, dh: u32) {
        if dw == 0 || dh == 0 {
            return;
        }
        let scaled = imageops::resize(image, dw, dh, FilterType::Triangle);
        imageops::overlay(&mut self.image, &scaled, dx, dy);
    }
}

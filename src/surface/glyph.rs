//! Fixed-width glyph rasterization onto RGBA bitmaps.

use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X10, FONT_6X12, FONT_6X9, FONT_7X13,
    FONT_7X14, FONT_9X15, FONT_9X18,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use image::{Pixel as _, Rgba, RgbaImage};

use super::{TextBaseline, TextStyle};

/// Pick the tallest built-in monospace font that fits within `font_size` pixels.
///
/// Sizes below the smallest face fall back to the 4x6 font. Only printable
/// ASCII is covered; other characters render as the font's replacement glyph.
pub fn font_for_size(font_size: u32) -> &'static MonoFont<'static> {
    match font_size {
        0..=6 => &FONT_4X6,
        7 => &FONT_5X7,
        8 => &FONT_5X8,
        9 => &FONT_6X9,
        10 | 11 => &FONT_6X10,
        12 => &FONT_6X12,
        13 => &FONT_7X13,
        14 => &FONT_7X14,
        15..=17 => &FONT_9X15,
        18 | 19 => &FONT_9X18,
        _ => &FONT_10X20,
    }
}

/// Whether the built-in fonts have a glyph for `glyph`.
///
/// Anything outside printable ASCII would draw as the replacement glyph.
pub fn has_glyph(glyph: char) -> bool {
    (' '..='~').contains(&glyph)
}

impl From<TextBaseline> for Baseline {
    fn from(baseline: TextBaseline) -> Self {
        match baseline {
            TextBaseline::Alphabetic => Baseline::Alphabetic,
            TextBaseline::Top => Baseline::Top,
        }
    }
}

/// Draw target that blends every lit font pixel into an RGBA bitmap.
struct GlyphPen<'a> {
    image: &'a mut RgbaImage,
    color: Rgba<u8>,
}

impl OriginDimensions for GlyphPen<'_> {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for GlyphPen<'_> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(point, color) in pixels {
            if !color.is_on() {
                continue;
            }
            // Clip to the bitmap
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x >= width || y >= height {
                continue;
            }
            match self.color.0[3] {
                0 => {}
                255 => self.image.put_pixel(x, y, self.color),
                _ => self.image.get_pixel_mut(x, y).blend(&self.color),
            }
        }
        Ok(())
    }
}

/// Rasterize `glyph` into `image` anchored at `(x, y)`.
pub(super) fn draw_glyph(
    image: &mut RgbaImage,
    glyph: char,
    x: i32,
    y: i32,
    baseline: TextBaseline,
    style: &TextStyle,
) {
    let mut buf = [0u8; 4];
    let text = glyph.encode_utf8(&mut buf);
    let character_style = MonoTextStyle::new(font_for_size(style.font_size), BinaryColor::On);
    let mut pen = GlyphPen {
        image,
        color: style.color,
    };

    let drawn = Text::with_baseline(text, Point::new(x, y), character_style, baseline.into())
        .draw(&mut pen);
    if let Err(never) = drawn {
        match never {}
    }
}

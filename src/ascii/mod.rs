//! ASCII art conversion of sampled surfaces.
//!
//! The pipeline has three stages:
//!
//! 1. **Sampling** - block-average the surface into a [`SampledGrid`]
//! 2. **Character mapping** - grayscale lookup by luminance, or cycling
//!    through the charset for colored output
//! 3. **Output** - colored or grayscale markup, or a glyph bitmap
//!
//! # Character Sets
//!
//! Built-in ramps are available via [`Preset`]:
//! - `Monochrome` - 15-level dark-on-light ramp (grayscale default)
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod charset;
mod downsample;
mod glyphs;
mod html;
mod luminance;
mod mapping;

pub use charset::{
    Charset, Preset, BLOCKS_CHARSET, COLORED_CHARSET, MINIMAL_CHARSET, MONOCHROME_CHARSET,
    STANDARD_CHARSET,
};
pub use downsample::{sample, sampling_unit, SampledCell, SampledGrid, DEFAULT_GRID_SIZE};
pub use glyphs::{
    colored_glyphs, grayscale_glyphs, GlyphOptions, DEFAULT_FONT_SIZE, MAX_GLYPH_IMAGE_PIXELS,
};
pub use html::{
    colored_markup, grayscale_markup, push_escaped, rgba_css, wrap_in_container, HtmlOptions,
    CONTAINER_CLASS,
};
pub use luminance::{relative_luminance, BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};
pub use mapping::{
    glyph_cycle_index, grayscale_glyph, grayscale_index, map_to_chars, markup_cycle_index,
    FALLBACK_GLYPH,
};

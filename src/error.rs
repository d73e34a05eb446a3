//! Error types for sampling and rendering.

/// Errors that can occur while building or rendering an [`AsciiArtCanvas`](crate::AsciiArtCanvas).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied surface does not satisfy the surface contract
    #[error("invalid surface: {0}")]
    InvalidSurface(String),

    /// The sampling unit computed to zero pixels
    #[error(
        "grid size {grid_size} is larger than the longest side of a {width}x{height} surface"
    )]
    InvalidSize {
        width: u32,
        height: u32,
        grid_size: u32,
    },

    /// A grid size of zero was requested
    #[error("grid size must be greater than 0")]
    InvalidGridSize,

    /// A charset with no glyphs was supplied
    #[error("charset must contain at least one character")]
    EmptyCharset,

    /// A glyph image was requested with a zero font size
    #[error("font size must be greater than 0")]
    InvalidFontSize,

    /// The glyph image would exceed the supported bitmap size
    #[error("glyph image of {width}x{height} pixels exceeds the {max} pixel limit")]
    GlyphImageTooLarge { width: u64, height: u64, max: u64 },

    /// The charset holds a glyph the built-in fonts cannot draw
    #[error("glyph {0:?} cannot be drawn; glyph images support printable ASCII only")]
    UnsupportedGlyph(char),

    /// Image decoding or encoding failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! ascii-canvas: render bitmaps as ASCII art.
//!
//! An [`AsciiArtCanvas`] owns a drawing [`Surface`], samples it into a
//! coarse grid of averaged cells and renders that grid as colored markup,
//! grayscale markup, or a bitmap of text glyphs.
//!
//! ```ignore
//! use ascii_canvas::{AsciiArtCanvas, HtmlOptions};
//!
//! let art = AsciiArtCanvas::open("photo.png")?;
//! let text = art.to_grayscale_html(&HtmlOptions::default())?;
//! println!("{}", text);
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod mount;
pub mod renderer;
pub mod surface;

pub use ascii::{Charset, GlyphOptions, HtmlOptions, Preset, SampledCell, SampledGrid};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use mount::{Container, Element};
pub use renderer::AsciiArtCanvas;
pub use surface::{Canvas, Context2d, Surface, TextStyle};

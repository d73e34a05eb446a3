//! Configuration file handling for ascii-canvas.
//!
//! Loads render defaults from `<config dir>/ascii-canvas/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{Charset, GlyphOptions, HtmlOptions, Preset, DEFAULT_FONT_SIZE, DEFAULT_GRID_SIZE};

/// Configuration file structure for ascii-canvas.
///
/// ```toml
/// grid_size = 80
///
/// [grayscale]
/// preset = "standard"
///
/// [colored]
/// chars = "@#*"
///
/// [html]
/// container = true
///
/// [glyphs]
/// font_size = 12
/// gap = 2
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grid_size: Option<u32>,
    #[serde(default)]
    pub grayscale: CharsConfig,
    #[serde(default)]
    pub colored: CharsConfig,
    #[serde(default)]
    pub html: HtmlConfig,
    #[serde(default)]
    pub glyphs: GlyphConfig,
}

/// Charset selection for one render mode.
///
/// `chars` wins over `preset` when both are given.
#[derive(Debug, Deserialize, Default)]
pub struct CharsConfig {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub chars: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HtmlConfig {
    #[serde(default)]
    pub container: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct GlyphConfig {
    #[serde(default)]
    pub font_size: Option<u32>,
    #[serde(default)]
    pub gap: Option<u32>,
}

impl CharsConfig {
    /// Resolve to a charset, or `None` to use the mode's default.
    pub fn charset(&self) -> Result<Option<Charset>, ConfigError> {
        if let Some(chars) = &self.chars {
            return chars
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::EmptyCharset);
        }
        match &self.preset {
            Some(name) => Preset::from_name(name)
                .map(|preset| Some(preset.into()))
                .ok_or_else(|| ConfigError::UnknownPreset(name.clone())),
            None => Ok(None),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn grid_size(&self) -> u32 {
        self.grid_size.unwrap_or(DEFAULT_GRID_SIZE)
    }

    fn html_options(&self, chars: &CharsConfig) -> Result<HtmlOptions, ConfigError> {
        Ok(HtmlOptions {
            grid_size: self.grid_size(),
            charset: chars.charset()?,
            container: self.html.container,
        })
    }

    fn glyph_options(&self, chars: &CharsConfig) -> Result<GlyphOptions, ConfigError> {
        Ok(GlyphOptions {
            grid_size: self.grid_size(),
            charset: chars.charset()?,
            font_size: self.glyphs.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            gap: self.glyphs.gap.unwrap_or(0),
        })
    }

    /// Options for [`AsciiArtCanvas::to_colored_html`](crate::AsciiArtCanvas::to_colored_html).
    pub fn colored_html(&self) -> Result<HtmlOptions, ConfigError> {
        self.html_options(&self.colored)
    }

    /// Options for [`AsciiArtCanvas::to_grayscale_html`](crate::AsciiArtCanvas::to_grayscale_html).
    pub fn grayscale_html(&self) -> Result<HtmlOptions, ConfigError> {
        self.html_options(&self.grayscale)
    }

    /// Options for [`AsciiArtCanvas::to_colored_glyphs`](crate::AsciiArtCanvas::to_colored_glyphs).
    pub fn colored_glyphs(&self) -> Result<GlyphOptions, ConfigError> {
        self.glyph_options(&self.colored)
    }

    /// Options for [`AsciiArtCanvas::to_grayscale_glyphs`](crate::AsciiArtCanvas::to_grayscale_glyphs).
    pub fn grayscale_glyphs(&self) -> Result<GlyphOptions, ConfigError> {
        self.glyph_options(&self.grayscale)
    }
}

/// Errors that can occur when loading or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(
        "Unknown charset preset '{0}'. Available presets: monochrome, standard, blocks, minimal"
    )]
    UnknownPreset(String),
    #[error("Configured chars must not be empty")]
    EmptyCharset,
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-canvas").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-canvas/config.toml")
        })
}

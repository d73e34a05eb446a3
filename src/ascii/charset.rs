//! Character set definitions for ASCII rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default grayscale ramp (15 levels).
/// Characters ordered from darkest (@) to lightest (space).
/// Works well for dark ink on a light page.
pub const MONOCHROME_CHARSET: &[char] = &[
    '@', '8', '0', 'G', 'C', 'L', 'f', 't', '1', 'i', ';', ':', ',', '.', ' ',
];

/// Default colored charset: every cell is a single solid glyph.
pub const COLORED_CHARSET: &[char] = &['@'];

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
/// Works well on dark backgrounds.
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Named built-in character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Dark-on-light ramp (15 levels)
    #[default]
    Monochrome,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
}

impl Preset {
    /// Get the character slice for this preset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            Preset::Monochrome => MONOCHROME_CHARSET,
            Preset::Standard => STANDARD_CHARSET,
            Preset::Blocks => BLOCKS_CHARSET,
            Preset::Minimal => MINIMAL_CHARSET,
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Monochrome => "monochrome",
            Preset::Standard => "standard",
            Preset::Blocks => "blocks",
            Preset::Minimal => "minimal",
        }
    }

    /// Look a preset up by its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "monochrome" => Some(Preset::Monochrome),
            "standard" => Some(Preset::Standard),
            "blocks" => Some(Preset::Blocks),
            "minimal" => Some(Preset::Minimal),
            _ => None,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, non-empty sequence of single-character glyphs.
///
/// Index 0 is the darkest glyph for grayscale rendering. Colored rendering
/// cycles through the glyphs regardless of brightness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset(Vec<char>);

impl Charset {
    /// Build a charset, rejecting an empty one.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(Error::EmptyCharset);
        }
        Ok(Self(chars))
    }

    /// The default grayscale ramp.
    pub fn monochrome() -> Self {
        Preset::Monochrome.into()
    }

    /// The default colored charset.
    pub fn colored() -> Self {
        Self(COLORED_CHARSET.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl From<Preset> for Charset {
    fn from(preset: Preset) -> Self {
        Self(preset.chars().to_vec())
    }
}

impl FromStr for Charset {
    type Err = Error;

    /// Split a string into one glyph per `char`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars())
    }
}

//! Cell to character mapping.

use super::charset::Charset;

/// Glyph substituted when a grayscale index falls outside the charset.
pub const FALLBACK_GLYPH: char = ' ';

/// Index of the grayscale glyph for a luminance value.
///
/// `index = round(luminance * (len - 1))`. Non-decreasing in `luminance`.
///
/// # Returns
/// `None` when the index falls outside `[0, len - 1]`, which happens for
/// luminance outside `[0, 1]` or a non-finite value.
pub fn grayscale_index(luminance: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let max = (len - 1) as f64;
    let index = (luminance * max).round();
    if index.is_finite() && (0.0..=max).contains(&index) {
        Some(index as usize)
    } else {
        None
    }
}

/// Select the grayscale glyph for a luminance value.
///
/// An out-of-range index is reported as a warning and replaced with
/// [`FALLBACK_GLYPH`] so rendering can continue.
pub fn grayscale_glyph(luminance: f64, charset: &Charset) -> char {
    match grayscale_index(luminance, charset.len()).and_then(|i| charset.get(i)) {
        Some(glyph) => glyph,
        None => {
            log::warn!(
                target: "ascii_canvas::mapping",
                "invalid glyph index: luminance={} charset_len={}, using fallback",
                luminance,
                charset.len()
            );
            FALLBACK_GLYPH
        }
    }
}

/// Colored markup index: a running counter over cells in scan order.
pub fn markup_cycle_index(counter: usize, len: usize) -> usize {
    counter % len.max(1)
}

/// Colored glyph-image index derived from the cell position.
///
/// `index = (row * row_width + col) % len`, where `row_width` is the
/// configured grid size rather than the sampled column count.
pub fn glyph_cycle_index(row: usize, col: usize, row_width: usize, len: usize) -> usize {
    (row * row_width + col) % len.max(1)
}

/// Map a sequence of luminance values to grayscale glyphs.
///
/// # Example
/// ```ignore
/// let glyphs = map_to_chars(&[0.0, 1.0], &Charset::monochrome());
/// // glyphs[0] = '@' (darkest)
/// // glyphs[1] = ' ' (lightest)
/// ```
pub fn map_to_chars(luminance: &[f64], charset: &Charset) -> Vec<char> {
    luminance
        .iter()
        .map(|&l| grayscale_glyph(l, charset))
        .collect()
}

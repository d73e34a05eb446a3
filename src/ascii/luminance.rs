//! Relative luminance (W3C / ITU-R BT.709 coefficients).

/// Weight of the normalized red channel.
pub const RED_WEIGHT: f64 = 0.2126;
/// Weight of the normalized green channel.
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Weight of the normalized blue channel.
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Compute the relative luminance of an sRGB color.
///
/// Each channel is normalized to `[0, 1]` before weighting:
/// `L = 0.2126 * R + 0.7152 * G + 0.0722 * B`.
///
/// # Returns
/// A value in `[0, 1]`; 0 for black and 1 for white.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let normalize = |v: u8| f64::from(v) / 255.0;
    RED_WEIGHT * normalize(r) + GREEN_WEIGHT * normalize(g) + BLUE_WEIGHT * normalize(b)
}

//! Saturation boost that pushes channels away from their gray average.

use crate::bitmap::Rgb;

/// Saturation multiplier used when none is configured.
pub const DEFAULT_SATURATION: f64 = 1.5;

/// Scale each channel's distance from the pixel's gray average by `factor`.
///
/// For each channel `c`: `avg + (c - avg) * factor`, truncated toward zero
/// and clamped to 0..=255. The average is not truncated before use.
/// A factor of 1.0 returns the input unchanged, values above 1.0 saturate,
/// values below 1.0 fade toward gray.
pub fn enhance(pixel: Rgb, factor: f64) -> Rgb {
    let avg = (pixel.r as f64 + pixel.g as f64 + pixel.b as f64) / 3.0;
    let scale = |c: u8| clamp(avg + (c as f64 - avg) * factor);
    Rgb::new(scale(pixel.r), scale(pixel.g), scale(pixel.b))
}

fn clamp(value: f64) -> u8 {
    // `as i64` truncates toward zero and saturates on overflow.
    (value as i64).clamp(0, 255) as u8
}

//! Truecolor escape-sequence rendering.

use std::fmt::Write;

use crate::bitmap::{Rgb, RgbImage};

use super::enhance::{enhance, DEFAULT_SATURATION};

/// Glyph drawn for every pixel when none is configured.
pub const DEFAULT_GLYPH: char = '*';

/// SGR reset sequence written after every glyph.
pub const RESET: &str = "\x1b[0m";

/// A single glyph in the given foreground color followed by a reset.
///
/// Produces `ESC[38;2;{r};{g};{b}m{glyph}ESC[0m`.
pub fn colored_glyph(color: Rgb, glyph: char) -> String {
    let mut out = String::with_capacity(24);
    push_colored_glyph(&mut out, color, glyph);
    out
}

/// Render `image` with the default saturation boost.
pub fn render(image: &RgbImage, glyph: char) -> String {
    render_with_saturation(image, glyph, DEFAULT_SATURATION)
}

/// Render `image` row by row, enhancing each pixel by `saturation`.
///
/// Every row ends with a newline. An image with no rows renders as an
/// empty string.
pub fn render_with_saturation(image: &RgbImage, glyph: char, saturation: f64) -> String {
    let mut out = String::new();
    render_into(image, glyph, saturation, &mut out);
    out
}

/// Render into an existing buffer to avoid allocation.
///
/// The buffer is cleared first.
pub fn render_into(image: &RgbImage, glyph: char, saturation: f64, buffer: &mut String) {
    buffer.clear();
    // Widest cell is "\x1b[38;2;255;255;255m" + glyph + reset.
    buffer.reserve(image.height() as usize * (image.width() as usize * 28 + 1));

    for row in image.rows() {
        for &pixel in row {
            push_colored_glyph(buffer, enhance(pixel, saturation), glyph);
        }
        buffer.push('\n');
    }
}

fn push_colored_glyph(out: &mut String, color: Rgb, glyph: char) {
    // Writing to a String cannot fail.
    let _ = write!(out, "\x1b[38;2;{};{};{}m{}{}", color.r, color.g, color.b, glyph, RESET);
}

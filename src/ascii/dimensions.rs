//! Row count calculation for aspect-ratio-correct rendering.

/// Vertical correction for terminal character cells.
///
/// Cells are a little under twice as tall as they are wide, so an image
/// rendered one pixel per cell needs about half as many rows as its pixel
/// aspect ratio would suggest.
pub const CELL_ASPECT_CORRECTION: f64 = 0.55;

/// Number of output rows for an image scaled to `columns` characters wide.
///
/// Computes `floor(columns * (img_height / img_width) * aspect)`. The result
/// is truncated, never rounded, and may be zero for very wide images.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `columns` - Output width in characters
/// * `aspect` - Cell correction factor, normally [`CELL_ASPECT_CORRECTION`]
///
/// # Returns
/// The row count, or 0 when `img_width` is 0.
///
/// # Example
/// ```
/// use bmp_ascii::ascii::{target_height, CELL_ASPECT_CORRECTION};
///
/// // 4:3 image at 80 columns: 80 * 0.75 * 0.55 = 33
/// assert_eq!(target_height(640, 480, 80, CELL_ASPECT_CORRECTION), 33);
/// ```
pub fn target_height(img_width: u32, img_height: u32, columns: u32, aspect: f64) -> u32 {
    if img_width == 0 {
        return 0;
    }
    let aspect_ratio = img_height as f64 / img_width as f64;
    (columns as f64 * aspect_ratio * aspect) as u32
}

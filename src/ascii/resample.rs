//! Nearest-neighbor resampling to a character grid.

use crate::bitmap::RgbImage;

use super::dimensions::{target_height, CELL_ASPECT_CORRECTION};

/// Errors that can occur while resampling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResampleError {
    #[error("Cannot resample a {width}x{height} image to {columns} columns")]
    InvalidDimensions {
        width: u32,
        height: u32,
        columns: u32,
    },
}

/// Resize `image` to `new_width` columns using [`CELL_ASPECT_CORRECTION`].
///
/// See [`resize_with_aspect`].
pub fn resize(image: &RgbImage, new_width: u32) -> Result<RgbImage, ResampleError> {
    resize_with_aspect(image, new_width, CELL_ASPECT_CORRECTION)
}

/// Resize `image` to `new_width` columns with a custom cell aspect correction.
///
/// Every output pixel is an exact copy of one source pixel. Source indices
/// are `floor(x * step)` clamped to the last column or row, where the steps
/// are real-valued ratios of source to output size.
///
/// The row count comes from [`target_height`] and can be zero, in which case
/// the result has no rows. Callers must handle an empty image.
///
/// # Errors
/// [`ResampleError::InvalidDimensions`] when the source has no pixels or
/// `new_width` is zero.
pub fn resize_with_aspect(
    image: &RgbImage,
    new_width: u32,
    aspect: f64,
) -> Result<RgbImage, ResampleError> {
    let (old_w, old_h) = (image.width(), image.height());
    if old_w == 0 || old_h == 0 || new_width == 0 {
        return Err(ResampleError::InvalidDimensions {
            width: old_w,
            height: old_h,
            columns: new_width,
        });
    }

    let new_height = target_height(old_w, old_h, new_width, aspect);
    log::debug!(
        "Resampling {}x{} to {}x{} cells",
        old_w,
        old_h,
        new_width,
        new_height
    );
    if new_height == 0 {
        return Ok(RgbImage::empty(new_width));
    }

    let step_x = old_w as f64 / new_width as f64;
    let step_y = old_h as f64 / new_height as f64;
    let rows = image.rows();

    let resized = (0..new_height)
        .map(|y| {
            let src_y = ((y as f64 * step_y) as usize).min(old_h as usize - 1);
            let src_row = &rows[src_y];
            (0..new_width)
                .map(|x| {
                    let src_x = ((x as f64 * step_x) as usize).min(old_w as usize - 1);
                    src_row[src_x]
                })
                .collect()
        })
        .collect();

    RgbImage::from_rows(resized).ok_or(ResampleError::InvalidDimensions {
        width: old_w,
        height: old_h,
        columns: new_width,
    })
}

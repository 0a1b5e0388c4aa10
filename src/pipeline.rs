//! The decode, resize, enhance and render pass for one bitmap.
//!
//! Everything runs synchronously on the calling thread. The pipeline either
//! returns the complete rendering or the first error it hits.

use std::fmt;
use std::path::Path;

use crate::ascii::{self, ResampleError};
use crate::bitmap::{self, BitmapError, RgbImage};
use crate::config::RenderSettings;

/// Errors that can occur during a rendering pass
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    #[error(transparent)]
    Resample(#[from] ResampleError),

    #[error(
        "A {width}x{height} image at {columns} columns collapses to zero rows. Try a larger --width."
    )]
    EmptyOutput { width: u32, height: u32, columns: u32 },

    #[error(
        "A {width}x{height} image at {columns} columns needs {rows} rows, over the limit of {} cells. Try a smaller --width.",
        MAX_CELLS
    )]
    TooLarge {
        width: u32,
        height: u32,
        columns: u32,
        rows: u64,
    },
}

/// Most output cells a single rendering may produce.
///
/// Each cell is up to 28 bytes of escape-coded text, so this keeps the
/// rendered string near 100 MiB.
pub const MAX_CELLS: u64 = 4_000_000;

/// Progress reported while the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status<'a> {
    /// About to read the input file
    Reading(&'a Path),
    /// Header and pixels decoded
    Decoded { width: u32, height: u32 },
    /// About to resample to the target width
    Resizing { columns: u32 },
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Reading(path) => {
                write!(f, "Reading raw binary data from {}...", path.display())
            }
            Status::Decoded { width, height } => {
                write!(f, "Original Image: {}x{} pixels", width, height)
            }
            Status::Resizing { columns } => write!(f, "Resizing to width {}...", columns),
        }
    }
}

/// The finished character art and the geometry that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub source_width: u32,
    pub source_height: u32,
    pub columns: u32,
    pub rows: u32,
    /// Escape-coded text, one newline-terminated line per row
    pub text: String,
}

/// Run the full pipeline for `settings` without progress reporting.
pub fn run(settings: &RenderSettings) -> Result<Rendering, PipelineError> {
    run_with_progress(settings, |_| {})
}

/// Run the full pipeline, calling `on_status` before each stage.
pub fn run_with_progress<F>(
    settings: &RenderSettings,
    mut on_status: F,
) -> Result<Rendering, PipelineError>
where
    F: FnMut(Status<'_>),
{
    on_status(Status::Reading(&settings.input_path));
    let image = bitmap::decode(&settings.input_path)?;
    on_status(Status::Decoded {
        width: image.width(),
        height: image.height(),
    });

    on_status(Status::Resizing {
        columns: settings.width,
    });
    render_image(&image, settings)
}

/// Resize, enhance and render an already decoded image.
///
/// # Errors
/// [`PipelineError::EmptyOutput`] when the aspect correction leaves no rows,
/// [`PipelineError::TooLarge`] when the grid would exceed [`MAX_CELLS`].
pub fn render_image(
    image: &RgbImage,
    settings: &RenderSettings,
) -> Result<Rendering, PipelineError> {
    let rows = ascii::target_height(image.width(), image.height(), settings.width, settings.aspect)
        as u64;
    if rows * settings.width as u64 > MAX_CELLS {
        return Err(PipelineError::TooLarge {
            width: image.width(),
            height: image.height(),
            columns: settings.width,
            rows,
        });
    }

    let resized = ascii::resize_with_aspect(image, settings.width, settings.aspect)?;
    if resized.is_empty() {
        return Err(PipelineError::EmptyOutput {
            width: image.width(),
            height: image.height(),
            columns: settings.width,
        });
    }

    let text = ascii::render_with_saturation(&resized, settings.glyph, settings.saturation);
    log::info!(
        "Rendered {}x{} image as {}x{} cells ({} bytes)",
        image.width(),
        image.height(),
        resized.width(),
        resized.height(),
        text.len()
    );

    Ok(Rendering {
        source_width: image.width(),
        source_height: image.height(),
        columns: resized.width(),
        rows: resized.height(),
        text,
    })
}

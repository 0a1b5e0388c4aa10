//! Colored character-art rendering for decoded bitmaps.
//!
//! The pipeline runs in three steps:
//!
//! 1. **Resampling** - nearest-neighbor scaling to the target column count,
//!    with rows reduced to compensate for tall terminal cells
//! 2. **Enhancement** - per-pixel saturation boost away from the gray average
//! 3. **Rendering** - one glyph per pixel wrapped in a truecolor escape sequence

mod dimensions;
mod enhance;
mod render;
mod resample;

pub use dimensions::{target_height, CELL_ASPECT_CORRECTION};
pub use enhance::{enhance, DEFAULT_SATURATION};
pub use render::{colored_glyph, render, render_into, render_with_saturation, DEFAULT_GLYPH, RESET};
pub use resample::{resize, resize_with_aspect, ResampleError};

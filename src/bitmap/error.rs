//! Error types for bitmap decoding.

use std::path::PathBuf;

/// Errors that can occur while reading or decoding a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    #[error("'{}' not found. Please convert your image to .bmp format!", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a bitmap file (missing 'BM' signature)")]
    NotABitmap,

    #[error(
        "Unsupported bit depth: {bits} bits per pixel. Please re-save the image as a '24-bit Bitmap' (BMP)."
    )]
    UnsupportedBitDepth {
        /// Bits per pixel declared in the info header
        bits: u16,
    },

    #[error("Unsupported compression method {method}. Only uncompressed bitmaps are supported.")]
    UnsupportedCompression { method: u32 },

    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Truncated bitmap: expected at least {expected} bytes, found {actual}")]
    Truncated {
        /// Bytes the header says the file should hold
        expected: u64,
        /// Bytes actually available
        actual: u64,
    },
}

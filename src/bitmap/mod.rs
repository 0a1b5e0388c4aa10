//! Uncompressed 24-bit Windows bitmap decoding.
//!
//! Only the classic layout is understood: a `BM` file header, an info header
//! declaring 24 bits per pixel with no compression, and bottom-up scanlines
//! stored as Blue, Green, Red triples padded to 4-byte boundaries.

mod decode;
mod error;
mod header;
mod image;

pub use decode::{decode, decode_bytes, row_padding};
pub use error::BitmapError;
pub use header::{BitmapHeader, HEADER_LEN, SUPPORTED_BIT_DEPTH};
pub use image::{Rgb, RgbImage};

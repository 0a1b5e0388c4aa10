//! Fixed-offset header fields of a Windows bitmap.

use super::BitmapError;

/// Bytes of header needed before any field we read is available.
///
/// Covers the 14-byte file header plus the info header up to and including
/// the compression field.
pub const HEADER_LEN: usize = 34;

/// The only pixel depth the decoder accepts.
pub const SUPPORTED_BIT_DEPTH: u16 = 24;

const SIGNATURE: &[u8; 2] = b"BM";
const BI_RGB: u32 = 0;

/// The header fields the decoder needs, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Absolute offset of the first scanline
    pub data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
}

impl BitmapHeader {
    /// Parse and validate the header at the start of `bytes`.
    ///
    /// Checks run in a fixed order: length, signature, bit depth,
    /// compression, then dimensions.
    pub fn parse(bytes: &[u8]) -> Result<Self, BitmapError> {
        if bytes.len() < HEADER_LEN {
            return Err(BitmapError::Truncated {
                expected: HEADER_LEN as u64,
                actual: bytes.len() as u64,
            });
        }
        if &bytes[0..2] != SIGNATURE {
            return Err(BitmapError::NotABitmap);
        }

        let data_offset = read_u32(bytes, 10);
        let width = read_i32(bytes, 18);
        let height = read_i32(bytes, 22);
        let bits_per_pixel = read_u16(bytes, 28);
        let compression = read_u32(bytes, 30);

        if bits_per_pixel != SUPPORTED_BIT_DEPTH {
            return Err(BitmapError::UnsupportedBitDepth {
                bits: bits_per_pixel,
            });
        }
        if compression != BI_RGB {
            return Err(BitmapError::UnsupportedCompression {
                method: compression,
            });
        }
        // Negative heights mark top-down bitmaps, which are not supported.
        if width <= 0 || height <= 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }

        Ok(Self {
            data_offset,
            width: width as u32,
            height: height as u32,
            bits_per_pixel,
        })
    }

    /// Bytes of pixel data in one scanline, excluding padding.
    pub fn row_data_len(&self) -> u64 {
        self.width as u64 * 3
    }
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn read_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

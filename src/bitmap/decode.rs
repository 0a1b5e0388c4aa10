//! Scanline decoding for 24-bit bitmaps.

use std::path::Path;

use super::{BitmapError, BitmapHeader, Rgb, RgbImage};

/// Number of pad bytes after `width * 3` data bytes to reach a 4-byte boundary.
pub fn row_padding(width: u32) -> u32 {
    ((4 - (width as u64 * 3) % 4) % 4) as u32
}

/// Read and decode the bitmap at `path`.
///
/// The file is read in one scoped call, so the handle is released before
/// decoding starts on both the success and failure paths.
pub fn decode(path: &Path) -> Result<RgbImage, BitmapError> {
    if !path.is_file() {
        return Err(BitmapError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            BitmapError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            BitmapError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    decode_bytes(&bytes)
}

/// Decode an in-memory bitmap.
///
/// Scanlines are stored bottom-up on disk; the returned image has the
/// visual top row first.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbImage, BitmapError> {
    let header = BitmapHeader::parse(bytes)?;
    log::debug!(
        "Bitmap header: {}x{}, {} bpp, pixel data at offset {}",
        header.width,
        header.height,
        header.bits_per_pixel,
        header.data_offset
    );

    let padding = row_padding(header.width) as u64;
    let stride = header.row_data_len() + padding;
    let offset = header.data_offset as u64;

    // The last row's padding may be missing without losing any pixels.
    let expected = offset
        .saturating_add(stride.saturating_mul(header.height as u64))
        .saturating_sub(padding);
    if (bytes.len() as u64) < expected {
        return Err(BitmapError::Truncated {
            expected,
            actual: bytes.len() as u64,
        });
    }

    let width = header.width as usize;
    let stride = stride as usize;
    let offset = offset as usize;

    let mut rows: Vec<Vec<Rgb>> = (0..header.height as usize)
        .map(|y| {
            let start = offset + y * stride;
            bytes[start..start + width * 3]
                .chunks_exact(3)
                .map(|bgr| Rgb::new(bgr[2], bgr[1], bgr[0]))
                .collect()
        })
        .collect();
    rows.reverse();

    RgbImage::from_rows(rows).ok_or(BitmapError::InvalidDimensions {
        width: header.width as i32,
        height: header.height as i32,
    })
}

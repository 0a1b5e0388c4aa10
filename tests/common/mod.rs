//! Hand-built bitmap fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Size of the file header plus a BITMAPINFOHEADER.
pub const STANDARD_OFFSET: u32 = 54;

/// Encode `rows` (visual top row first) as a bitmap with the given bit depth.
pub fn bmp_bytes(rows: &[Vec<(u8, u8, u8)>], bits: u16) -> Vec<u8> {
    bmp_bytes_with_gap(rows, bits, 0)
}

/// Like [`bmp_bytes`] but with `gap` junk bytes between header and pixels.
pub fn bmp_bytes_with_gap(rows: &[Vec<(u8, u8, u8)>], bits: u16, gap: u32) -> Vec<u8> {
    let width = rows.first().map_or(0, Vec::len) as u32;
    let height = rows.len() as u32;
    let padding = (4 - (width * 3) % 4) % 4;
    let image_size = (width * 3 + padding) * height;
    let offset = STANDARD_OFFSET + gap;

    let mut out = header(width as i32, height as i32, bits, offset, image_size);
    out.extend(std::iter::repeat(0xEE).take(gap as usize));

    // Scanlines are stored bottom-up, channels as B, G, R
    for row in rows.iter().rev() {
        for &(r, g, b) in row {
            out.extend_from_slice(&[b, g, r]);
        }
        out.extend(std::iter::repeat(0).take(padding as usize));
    }
    out
}

/// A 54-byte header with arbitrary field values and no pixel data.
pub fn header(width: i32, height: i32, bits: u16, offset: u32, image_size: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(offset as usize + image_size as usize);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(offset + image_size).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&offset.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&bits.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&2835i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(out.len(), STANDARD_OFFSET as usize);
    out
}

/// A `width` x `height` image where every pixel is `color`.
pub fn solid(width: usize, height: usize, color: (u8, u8, u8)) -> Vec<Vec<(u8, u8, u8)>> {
    vec![vec![color; width]; height]
}

/// Write `bytes` to a file named `name` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive while the file is used.
pub fn write_temp(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    (dir, path)
}

//! Unit tests for the bitmap decoder.
//!
//! Every fixture is built byte by byte so the on-disk layout (bottom-up
//! scanlines, BGR channel order, 4-byte row padding) is under test control.

mod common;

use bmp_ascii::bitmap::{decode, decode_bytes, row_padding, BitmapError, BitmapHeader, Rgb};
use common::{bmp_bytes, bmp_bytes_with_gap, header, solid, write_temp, STANDARD_OFFSET};

const RED: (u8, u8, u8) = (255, 0, 0);
const GREEN: (u8, u8, u8) = (0, 255, 0);
const BLUE: (u8, u8, u8) = (0, 0, 255);
const WHITE: (u8, u8, u8) = (255, 255, 255);

// ==================== Layout ====================

#[test]
fn test_first_row_is_visual_top() {
    // Top: red, green. Bottom: blue, white. On disk the bottom row comes first.
    let bytes = bmp_bytes(&[vec![RED, GREEN], vec![BLUE, WHITE]], 24);
    assert_eq!(&bytes[54..57], &[255, 0, 0], "first stored pixel is bottom-left blue");

    let image = decode_bytes(&bytes).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    assert_eq!(image.pixel(0, 0), Some(Rgb::from(RED)));
    assert_eq!(image.pixel(1, 0), Some(Rgb::from(GREEN)));
    assert_eq!(image.pixel(0, 1), Some(Rgb::from(BLUE)));
    assert_eq!(image.pixel(1, 1), Some(Rgb::from(WHITE)));
}

#[test]
fn test_channel_order_is_bgr_on_disk() {
    let mut bytes = header(1, 1, 24, STANDARD_OFFSET, 4);
    bytes.extend_from_slice(&[255, 0, 0, 0]); // B=255, G=0, R=0, pad

    let image = decode_bytes(&bytes).unwrap();
    assert_eq!(image.pixel(0, 0), Some(Rgb::new(0, 0, 255)));
}

#[test]
fn test_width_three_skips_padding() {
    let rows = vec![
        vec![(1, 2, 3), (4, 5, 6), (7, 8, 9)],
        vec![(10, 11, 12), (13, 14, 15), (16, 17, 18)],
        vec![(19, 20, 21), (22, 23, 24), (25, 26, 27)],
    ];
    let bytes = bmp_bytes(&rows, 24);
    // 9 data bytes + 3 pad bytes per row
    assert_eq!(bytes.len(), 54 + 3 * 12);

    let image = decode_bytes(&bytes).unwrap();
    for (y, row) in rows.iter().enumerate() {
        let decoded: Vec<Rgb> = row.iter().copied().map(Rgb::from).collect();
        assert_eq!(image.row(y), Some(decoded.as_slice()), "row {}", y);
    }
}

#[test]
fn test_every_padding_width_decodes() {
    for width in 1..=8usize {
        let rows: Vec<Vec<(u8, u8, u8)>> = (0..3)
            .map(|y| (0..width).map(|x| (x as u8, y as u8, 200)).collect())
            .collect();
        let image = decode_bytes(&bmp_bytes(&rows, 24)).unwrap();
        assert_eq!(image.width() as usize, width);
        assert_eq!(image.height(), 3);
        assert_eq!(
            image.pixel(width - 1, 2),
            Some(Rgb::new(width as u8 - 1, 2, 200)),
            "width {}",
            width
        );
    }
}

#[test]
fn test_row_padding() {
    assert_eq!(row_padding(1), 1);
    assert_eq!(row_padding(2), 2);
    assert_eq!(row_padding(3), 3);
    assert_eq!(row_padding(4), 0);
    assert_eq!(row_padding(5), 1);
}

#[test]
fn test_data_offset_is_honored() {
    let rows = vec![vec![RED, BLUE]];
    let bytes = bmp_bytes_with_gap(&rows, 24, 10);
    let image = decode_bytes(&bytes).unwrap();
    assert_eq!(image.pixel(0, 0), Some(Rgb::from(RED)));
    assert_eq!(image.pixel(1, 0), Some(Rgb::from(BLUE)));
}

#[test]
fn test_header_fields() {
    let bytes = bmp_bytes(&solid(5, 3, RED), 24);
    let header = BitmapHeader::parse(&bytes).unwrap();
    assert_eq!(header.width, 5);
    assert_eq!(header.height, 3);
    assert_eq!(header.bits_per_pixel, 24);
    assert_eq!(header.data_offset, 54);
    assert_eq!(header.row_data_len(), 15);
}

#[test]
fn test_missing_final_row_padding_is_tolerated() {
    let mut bytes = bmp_bytes(&solid(1, 2, GREEN), 24);
    bytes.truncate(bytes.len() - 1);
    let image = decode_bytes(&bytes).unwrap();
    assert_eq!(image.height(), 2);
    assert_eq!(image.pixel(0, 0), Some(Rgb::from(GREEN)));
}

// ==================== Rejection ====================

#[test]
fn test_rejects_8_bit() {
    let bytes = bmp_bytes(&solid(4, 4, RED), 8);
    match decode_bytes(&bytes) {
        Err(BitmapError::UnsupportedBitDepth { bits }) => assert_eq!(bits, 8),
        other => panic!("expected UnsupportedBitDepth, got {:?}", other),
    }
}

#[test]
fn test_rejects_32_bit() {
    let bytes = bmp_bytes(&solid(4, 4, RED), 32);
    match decode_bytes(&bytes) {
        Err(BitmapError::UnsupportedBitDepth { bits }) => assert_eq!(bits, 32),
        other => panic!("expected UnsupportedBitDepth, got {:?}", other),
    }
}

#[test]
fn test_unsupported_depth_message_has_hint() {
    let err = decode_bytes(&bmp_bytes(&solid(1, 1, RED), 8)).unwrap_err();
    assert!(err.to_string().contains("24-bit"), "message: {}", err);
}

#[test]
fn test_rejects_compressed() {
    let mut bytes = bmp_bytes(&solid(2, 2, RED), 24);
    bytes[30..34].copy_from_slice(&1u32.to_le_bytes()); // BI_RLE8
    assert!(matches!(
        decode_bytes(&bytes),
        Err(BitmapError::UnsupportedCompression { method: 1 })
    ));
}

#[test]
fn test_rejects_missing_signature() {
    let mut bytes = bmp_bytes(&solid(2, 2, RED), 24);
    bytes[0] = b'P';
    assert!(matches!(decode_bytes(&bytes), Err(BitmapError::NotABitmap)));
}

#[test]
fn test_rejects_zero_width() {
    let bytes = header(0, 4, 24, STANDARD_OFFSET, 0);
    assert!(matches!(
        decode_bytes(&bytes),
        Err(BitmapError::InvalidDimensions { width: 0, height: 4 })
    ));
}

#[test]
fn test_rejects_zero_height() {
    let bytes = header(4, 0, 24, STANDARD_OFFSET, 0);
    assert!(matches!(
        decode_bytes(&bytes),
        Err(BitmapError::InvalidDimensions { width: 4, height: 0 })
    ));
}

#[test]
fn test_rejects_top_down() {
    let mut bytes = header(1, -1, 24, STANDARD_OFFSET, 4);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    assert!(matches!(
        decode_bytes(&bytes),
        Err(BitmapError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_short_header_is_truncated() {
    let bytes = &bmp_bytes(&solid(1, 1, RED), 24)[..20];
    assert!(matches!(
        decode_bytes(bytes),
        Err(BitmapError::Truncated {
            expected: 34,
            actual: 20
        })
    ));
}

#[test]
fn test_oversized_header_is_truncated() {
    // Header claims 4x4 but only one row of pixels follows
    let mut bytes = header(4, 4, 24, STANDARD_OFFSET, 48);
    bytes.extend_from_slice(&[0u8; 12]);
    match decode_bytes(&bytes) {
        Err(BitmapError::Truncated { expected, actual }) => {
            assert_eq!(expected, 54 + 48);
            assert_eq!(actual, 54 + 12);
        }
        other => panic!("expected Truncated, got {:?}", other),
    }
}

#[test]
fn test_offset_past_end_is_truncated() {
    let mut bytes = bmp_bytes(&solid(1, 1, RED), 24);
    bytes[10..14].copy_from_slice(&1000u32.to_le_bytes());
    assert!(matches!(
        decode_bytes(&bytes),
        Err(BitmapError::Truncated { .. })
    ));
}

// ==================== Files ====================

#[test]
fn test_decode_file() {
    let (_dir, path) = write_temp("solid.bmp", &bmp_bytes(&solid(3, 2, BLUE), 24));
    let image = decode(&path).unwrap();
    assert_eq!((image.width(), image.height()), (3, 2));
    assert!(image
        .rows()
        .iter()
        .flatten()
        .all(|&p| p == Rgb::from(BLUE)));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("output.bmp");
    match decode(&path) {
        Err(BitmapError::NotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_directory_is_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(matches!(
        decode(dir.path()),
        Err(BitmapError::NotFound { .. })
    ));
}

//! Pixel and image types shared by the decoder and the ASCII pipeline.

/// A single pixel as separate red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// A row-major grid of pixels.
///
/// Row 0 is the visually topmost scanline. Every row holds exactly `width`
/// pixels and there are exactly `height` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    rows: Vec<Vec<Rgb>>,
}

impl RgbImage {
    /// Build an image from rows, checking that every row has the same length.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            width: width as u32,
            height: rows.len() as u32,
            rows,
        })
    }

    /// An image of the given size with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![color; width as usize]; height as usize],
        }
    }

    /// An image with `width` columns declared but no rows.
    pub(crate) fn empty(width: u32) -> Self {
        Self {
            width,
            height: 0,
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Rgb>] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> Option<&[Rgb]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }
}

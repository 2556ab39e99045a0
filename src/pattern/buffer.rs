//! Generated pixel buffer.

use crate::types::Colour;

/// A square grid of colours produced by the pattern generator.
///
/// Pixels are stored row-major (`pixels[y * size + x]`). The buffer has no
/// mutating accessors; a new configuration produces a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: usize,
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    /// Wrap a fully populated pixel vector.
    pub(crate) fn from_pixels(size: usize, pixels: Vec<Colour>) -> Self {
        debug_assert_eq!(pixels.len(), size * size);
        Self { size, pixels }
    }

    /// Side length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get(y * self.size + x).copied()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        self.pixels.chunks_exact(self.size)
    }

    /// Convert to a flat RGBA byte buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            vec![Colour::BLACK, Colour::WHITE, Colour::WHITE, Colour::BLACK],
        )
    }

    #[test]
    fn test_get_row_major() {
        let buf = sample();
        assert_eq!(buf.get(1, 0), Some(Colour::WHITE));
        assert_eq!(buf.get(0, 1), Some(Colour::WHITE));
        assert_eq!(buf.get(1, 1), Some(Colour::BLACK));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buf = sample();
        assert_eq!(buf.get(2, 0), None);
        assert_eq!(buf.get(0, 2), None);
    }

    #[test]
    fn test_rows() {
        let buf = sample();
        let rows: Vec<&[Colour]> = buf.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Colour::WHITE, Colour::BLACK]);
    }

    #[test]
    fn test_to_rgba_buffer() {
        let bytes = sample().to_rgba_buffer();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..8], &[0, 0, 0, 255, 255, 255, 255, 255]);
    }
}

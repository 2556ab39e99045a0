//! PNG output for generated backdrops.
//!
//! Writes pixel buffers with optional integer nearest-neighbour scaling, so
//! tile edges stay hard at any output size.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{ChequerError, Result};
use crate::pattern::PixelBuffer;

/// Convert a pixel buffer to an image, upscaled by `scale`.
///
/// # Arguments
///
/// * `buffer` - The generated backdrop
/// * `scale` - Integer scale factor (values below 1 are treated as 1)
pub fn to_image(buffer: &PixelBuffer, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);

    let side = u32::try_from(buffer.size())
        .ok()
        .and_then(|s| s.checked_mul(scale))
        .ok_or_else(|| ChequerError::InvalidParameter {
            message: format!("{}px at scale {} is too large", buffer.size(), scale),
            help: Some("Use a smaller --scale".to_string()),
        })?;

    let size = buffer.size();
    let img: RgbaImage = ImageBuffer::from_fn(side, side, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        Rgba(buffer.pixels()[y * size + x].to_rgba())
    });

    Ok(img)
}

/// Write a pixel buffer to a PNG file.
pub fn write_png(buffer: &PixelBuffer, path: &Path, scale: u32) -> Result<()> {
    let img = to_image(buffer, scale)?;

    img.save(path).map_err(|e| ChequerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::generate;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let buffer = generate(2, 1, Colour::BLACK, Colour::WHITE).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&buffer, &path, 1).unwrap();
        assert!(path.exists());

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_write_png_scaled() {
        let buffer = generate(2, 1, Colour::TAN, Colour::CREAM).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&buffer, &path, 3).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 6);
        assert_eq!(img.get_pixel(2, 2).0, Colour::TAN.to_rgba());
        assert_eq!(img.get_pixel(3, 0).0, Colour::CREAM.to_rgba());
        assert_eq!(img.get_pixel(5, 5).0, Colour::TAN.to_rgba());
    }

    #[test]
    fn test_zero_scale_is_unscaled() {
        let buffer = generate(4, 2, Colour::TAN, Colour::CREAM).unwrap();
        let img = to_image(&buffer, 0).unwrap();
        assert_eq!(img.width(), 4);
    }

    #[test]
    fn test_write_png_with_transparency() {
        let clear = Colour::new(0, 0, 0, 0);
        let buffer = generate(2, 1, clear, Colour::new(255, 0, 0, 128)).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        write_png(&buffer, &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_write_png_bad_path() {
        let buffer = generate(2, 1, Colour::TAN, Colour::CREAM).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(write_png(&buffer, &path, 1).is_err());
    }
}

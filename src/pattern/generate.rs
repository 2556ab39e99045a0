//! Chequerboard pattern generation.
//!
//! Each pixel `(x, y)` belongs to tile `(x / p, y / p)`; tiles with an even
//! coordinate sum take the first colour, odd tiles the second. Edge tiles
//! that do not fit the canvas are drawn partial.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{ChequerError, Result};
use crate::types::Colour;

use super::PixelBuffer;

/// Canvas side length at which the CLI switches to [`generate_par`].
pub const PARALLEL_THRESHOLD: u32 = 512;

/// Generate a `canvas_size × canvas_size` chequerboard.
pub fn generate(
    canvas_size: u32,
    partition_size: u32,
    colour_a: Colour,
    colour_b: Colour,
) -> Result<PixelBuffer> {
    check_dimensions(canvas_size, partition_size)?;

    let size = canvas_size as usize;
    let mut pixels = vec![colour_a; size * size];
    for (y, row) in pixels.chunks_exact_mut(size).enumerate() {
        fill_row(row, y, partition_size as usize, colour_a, colour_b);
    }

    Ok(PixelBuffer::from_pixels(size, pixels))
}

/// Same as [`generate`], with rows filled across the rayon thread pool.
pub fn generate_par(
    canvas_size: u32,
    partition_size: u32,
    colour_a: Colour,
    colour_b: Colour,
) -> Result<PixelBuffer> {
    check_dimensions(canvas_size, partition_size)?;

    let size = canvas_size as usize;
    let mut pixels = vec![colour_a; size * size];
    pixels
        .par_chunks_exact_mut(size)
        .enumerate()
        .for_each(|(y, row)| fill_row(row, y, partition_size as usize, colour_a, colour_b));

    Ok(PixelBuffer::from_pixels(size, pixels))
}

/// Colour of tile `(tx, ty)`.
pub fn tile_colour(tx: usize, ty: usize, colour_a: Colour, colour_b: Colour) -> Colour {
    if (tx + ty) % 2 == 0 {
        colour_a
    } else {
        colour_b
    }
}

fn fill_row(row: &mut [Colour], y: usize, partition: usize, colour_a: Colour, colour_b: Colour) {
    let ty = y / partition;
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = tile_colour(x / partition, ty, colour_a, colour_b);
    }
}

fn check_dimensions(canvas_size: u32, partition_size: u32) -> Result<()> {
    if canvas_size == 0 {
        return Err(ChequerError::InvalidParameter {
            message: "canvas size must be positive".to_string(),
            help: Some("Board sizes are powers of two such as 128 or 512".to_string()),
        });
    }
    if partition_size == 0 {
        return Err(ChequerError::invalid("partition size must be positive"));
    }
    Ok(())
}

/// How a partition size divides a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tiling {
    pub canvas_size: u32,
    pub partition_size: u32,
    /// Tiles along one edge, counting a partial edge tile.
    pub tiles_per_side: u32,
    /// Width of the partial edge tile, 0 when tiles fit exactly.
    pub remainder: u32,
    /// Canvas is a whole number of tile pairs, so the pattern repeats seamlessly.
    pub clean: bool,
}

impl Tiling {
    pub fn new(canvas_size: u32, partition_size: u32) -> Result<Self> {
        check_dimensions(canvas_size, partition_size)?;

        let remainder = canvas_size % partition_size;
        let tiles_per_side = canvas_size / partition_size + u32::from(remainder != 0);
        let clean = partition_size
            .checked_mul(2)
            .is_some_and(|pair| canvas_size % pair == 0);

        Ok(Self {
            canvas_size,
            partition_size,
            tiles_per_side,
            remainder,
            clean,
        })
    }
}

//! Chequerboard synthesis.
//!
//! - `derive` - partition size from node footprint
//! - `generate` - fill a pixel buffer with alternating tiles
//! - `buffer` - the immutable result

mod buffer;
mod derive;
mod generate;

pub use buffer::PixelBuffer;
pub use derive::{derive_partition_size, effective_radius, pow2, CIRCLES_PER_SIDE, PARTITION_RADII};
pub use generate::{generate, generate_par, tile_colour, Tiling, PARALLEL_THRESHOLD};

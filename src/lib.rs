//! chequer - Chequerboard backdrop generator
//!
//! Generates square two-colour chequerboards whose tiles are sized to pack a
//! 4×4 grid of rendered graph nodes, for use as a board backdrop.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pattern;
pub mod regen;
pub mod render;
pub mod types;

pub use error::{ChequerError, Result};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use pattern::{derive_partition_size, generate, generate_par, PixelBuffer, Tiling};
pub use regen::Regenerator;
pub use render::{write_meta_json, write_png, BackdropMeta};
pub use types::{BoardSize, Colour, Configuration, NodeSize, Resolved, Sizing, Spacing, Tier};

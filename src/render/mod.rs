//! Output surfaces for generated backdrops.
//!
//! Writers only read the pixel buffer; they never modify it.

mod meta;
mod png;

pub use meta::{to_json, write_meta_json, BackdropMeta, TilingReport};
pub use png::{to_image, write_png};

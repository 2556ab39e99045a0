//! JSON sidecar describing a generated backdrop.
//!
//! Lets a host size its board object and place nodes on tile boundaries
//! without re-deriving the partition size.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{ChequerError, Result};
use crate::pattern::Tiling;
use crate::types::{Colour, Resolved};

/// How a resolved configuration tiles the board.
#[derive(Debug, Clone, Serialize)]
pub struct TilingReport {
    #[serde(flatten)]
    pub tiling: Tiling,
    pub footprint_radius: i64,
    pub spacing_factor: i64,
    pub effective_radius: i64,
    pub colour_a: Colour,
    pub colour_b: Colour,
}

impl TilingReport {
    pub fn new(resolved: &Resolved) -> Result<Self> {
        Ok(Self {
            tiling: resolved.tiling()?,
            footprint_radius: resolved.footprint_radius,
            spacing_factor: resolved.spacing_factor,
            effective_radius: resolved.effective_radius()?,
            colour_a: resolved.colour_a,
            colour_b: resolved.colour_b,
        })
    }
}

/// Backdrop metadata written next to the PNG.
#[derive(Debug, Clone, Serialize)]
pub struct BackdropMeta {
    pub image: String,
    pub scale: u32,
    #[serde(flatten)]
    pub report: TilingReport,
}

impl BackdropMeta {
    pub fn new(resolved: &Resolved, image: impl Into<String>, scale: u32) -> Result<Self> {
        Ok(Self {
            image: image.into(),
            scale: scale.max(1),
            report: TilingReport::new(resolved)?,
        })
    }
}

/// Serialize any backdrop description as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| ChequerError::Parse {
        message: format!("Failed to serialize backdrop metadata: {}", e),
        help: None,
    })
}

/// Write backdrop metadata as pretty-printed JSON.
pub fn write_meta_json(meta: &BackdropMeta, path: &Path) -> Result<()> {
    let json = to_json(meta)?;
    fs::write(path, json).map_err(|e| ChequerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write backdrop metadata: {}", e),
    })?;
    Ok(())
}

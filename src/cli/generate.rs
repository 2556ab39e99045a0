//! Generate command implementation.
//!
//! Resolves the configuration, renders the chequerboard and writes it as a
//! PNG, optionally with a JSON sidecar.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{ChequerError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};
use crate::pattern::{PixelBuffer, Tiling};
use crate::render::{write_meta_json, write_png, BackdropMeta};
use crate::types::Resolved;

use super::ConfigArgs;

/// Generate a backdrop PNG
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output PNG path (default: backdrop.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Also write a JSON sidecar describing the tiling
    #[arg(long)]
    pub meta: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let mut overrides = args.config.overrides();
    overrides.output = args.output;
    overrides.scale = args.scale;

    let manifest = Manifest::load_or_default(args.config.config.as_deref())?.overlay(&overrides);
    let resolved = manifest.configuration()?.resolve()?;
    let output = manifest.effective_output();
    let scale = manifest.effective_scale();

    let tiling = resolved.tiling()?;
    report_tiling(&tiling, printer);

    let buffer = resolved.generate()?;
    write_outputs(&buffer, &resolved, &output, scale, args.meta, printer)
}

/// Warn when edge tiles will be drawn partial or the pattern will not repeat.
pub(crate) fn report_tiling(tiling: &Tiling, printer: &Printer) {
    printer.status(
        "Generating",
        &format!(
            "{0}x{0} backdrop {1}",
            tiling.canvas_size,
            printer.dim(&format!("({}px tiles)", tiling.partition_size))
        ),
    );

    if tiling.remainder != 0 {
        printer.warning(
            "Partial",
            &format!(
                "{}px partition does not divide {}px board; edge tiles are {}px",
                tiling.partition_size, tiling.canvas_size, tiling.remainder
            ),
        );
    } else if !tiling.clean {
        printer.warning(
            "Uneven",
            &format!(
                "{} tiles per side; the pattern will not repeat seamlessly",
                tiling.tiles_per_side
            ),
        );
    }
}

/// Write the PNG (and sidecar) for a generated buffer.
pub(crate) fn write_outputs(
    buffer: &PixelBuffer,
    resolved: &Resolved,
    output: &Path,
    scale: u32,
    meta: bool,
    printer: &Printer,
) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ChequerError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    write_png(buffer, output, scale)?;
    printer.status("Wrote", &printer.cyan(&display_path(output)));

    if meta {
        let meta_path = output.with_extension("json");
        let image = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let meta = BackdropMeta::new(resolved, image, scale)?;
        write_meta_json(&meta, &meta_path)?;
        printer.status("Wrote", &printer.cyan(&display_path(&meta_path)));
    }

    Ok(())
}

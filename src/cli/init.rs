//! Init command implementation.
//!
//! Writes a `chequer.yaml` manifest holding the default backdrop settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{ChequerError, Result};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, Printer};
use crate::types::{Colour, DEFAULT_RADIUS_EXPONENT, DEFAULT_SIZE_EXPONENT};

/// Initialize a chequer project by generating a chequer.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing chequer.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(ChequerError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&manifest_path, default_manifest()).map_err(|e| ChequerError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &printer.cyan(&display_path(&manifest_path)));

    Ok(())
}

/// Build YAML manually so the alternative sizing keys can be left as comments.
fn default_manifest() -> String {
    let mut yaml = String::new();

    yaml.push_str("# Board and node sizes as powers of two\n");
    yaml.push_str(&format!("size_exponent: {}\n", DEFAULT_SIZE_EXPONENT));
    yaml.push_str(&format!("radius_exponent: {}\n", DEFAULT_RADIUS_EXPONENT));
    yaml.push_str("# ...or as named tiers (remove the exponents above)\n");
    yaml.push_str("# board: medium\n");
    yaml.push_str("# node: s\n");
    yaml.push_str("# spacing: none\n");
    yaml.push_str(&format!("colour_a: \"{}\"\n", Colour::TAN));
    yaml.push_str(&format!("colour_b: \"{}\"\n", Colour::CREAM));
    yaml.push_str("output: backdrop.png\n");
    yaml.push_str("scale: 1\n");

    yaml
}

//! Watch command implementation.
//!
//! Rewrites the backdrop whenever the manifest changes on disk. A change
//! that resolves to the same configuration (whitespace, comments, an
//! equivalent tier) and the same output path and scale leaves the PNG
//! untouched.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::error::{ChequerError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};
use crate::regen::Regenerator;

use super::generate::{report_tiling, write_outputs};
use super::ConfigArgs;

/// Regenerate the backdrop whenever chequer.yaml changes
#[derive(Args, Debug)]
pub struct WatchArgs {
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

/// What one manifest reload did.
#[derive(Debug, PartialEq, Eq)]
pub enum Reload {
    Written(PathBuf),
    Unchanged,
}

/// Re-reads the manifest and feeds it to a [`Regenerator`].
pub struct Session {
    manifest_path: PathBuf,
    overrides: Manifest,
    meta: bool,
    regen: Regenerator,
    /// Output path and scale of the last successful write.
    written: Option<(PathBuf, u32)>,
}

impl Session {
    pub fn new(manifest_path: PathBuf, overrides: Manifest, meta: bool) -> Self {
        Self {
            manifest_path,
            overrides,
            meta,
            regen: Regenerator::new(),
            written: None,
        }
    }

    /// Load the manifest and write the backdrop if the configuration or
    /// the output target changed.
    pub fn reload(&mut self, printer: &Printer) -> Result<Reload> {
        let manifest = Manifest::load(&self.manifest_path)?.overlay(&self.overrides);
        let config = manifest.configuration()?;
        let resolved = config.resolve()?;

        let target = (manifest.effective_output(), manifest.effective_scale());
        if self.written.as_ref() != Some(&target) {
            self.regen.force();
        }

        let Some(buffer) = self.regen.refresh(&config)? else {
            return Ok(Reload::Unchanged);
        };

        let (output, scale) = target;
        report_tiling(&resolved.tiling()?, printer);
        if let Err(e) = write_outputs(&buffer, &resolved, &output, scale, self.meta, printer) {
            // The buffer never reached disk, so retry on the next change
            self.regen.force();
            self.written = None;
            return Err(e);
        }

        self.written = Some((output.clone(), scale));
        Ok(Reload::Written(output))
    }

    fn is_manifest_event(&self, event: &Event) -> bool {
        if !matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
        ) {
            return false;
        }
        let Some(name) = self.manifest_path.file_name() else {
            return false;
        };
        event.paths.iter().any(|p| p.file_name() == Some(name))
    }
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args
        .config
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILENAME));

    let mut overrides = args.config.overrides();
    overrides.output = args.output;
    overrides.scale = args.scale;

    let mut session = Session::new(manifest_path.clone(), overrides, args.meta);
    session.reload(printer)?;

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;

    // Watch the directory: editors often replace the file rather than write to it
    let dir = watch_dir(&manifest_path);
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(watch_error)?;

    printer.info("Watching", &printer.cyan(&display_path(&manifest_path)));

    for res in rx {
        match res {
            Ok(event) if session.is_manifest_event(&event) => match session.reload(printer) {
                Ok(Reload::Written(_)) => {}
                Ok(Reload::Unchanged) => printer.info("Unchanged", &printer.dim("configuration")),
                Err(e) => printer.warning("Skipped", &e.to_string()),
            },
            Ok(_) => {}
            Err(e) => printer.warning("Watch", &e.to_string()),
        }
    }

    Ok(())
}

fn watch_dir(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn watch_error(e: notify::Error) -> ChequerError {
    ChequerError::Watch {
        message: e.to_string(),
    }
}

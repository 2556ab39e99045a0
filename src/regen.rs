//! Change-detecting regeneration.
//!
//! The host calls [`Regenerator::refresh`] whenever it suspects the
//! configuration may have changed. A new buffer is produced only when the
//! resolved configuration differs from the last one applied.

use crate::error::Result;
use crate::pattern::PixelBuffer;
use crate::types::{Configuration, Resolved};

/// Tracks the last applied configuration.
#[derive(Debug, Default)]
pub struct Regenerator {
    applied: Option<Resolved>,
}

impl Regenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerate if `config` resolves differently from the last applied one.
    ///
    /// Returns `Ok(None)` when nothing changed. On error the previously
    /// applied snapshot is kept.
    pub fn refresh(&mut self, config: &Configuration) -> Result<Option<PixelBuffer>> {
        let resolved = config.resolve()?;
        if self.applied == Some(resolved) {
            return Ok(None);
        }

        let buffer = resolved.generate()?;
        self.applied = Some(resolved);
        Ok(Some(buffer))
    }

    /// Forget the applied snapshot so the next refresh regenerates.
    pub fn force(&mut self) {
        self.applied = None;
    }

    /// The configuration the current buffer was generated from.
    pub fn applied(&self) -> Option<&Resolved> {
        self.applied.as_ref()
    }
}

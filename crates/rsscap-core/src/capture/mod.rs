//! Capture persistence: write-if-changed with atomic replacement.

mod writer;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Outcome of a `write_if_changed` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Content differed or no previous capture existed; the file was replaced.
    Changed,
    /// Stored content is byte-identical; nothing was written.
    Unchanged,
}

/// Compares `content` with the file at `path` and replaces the file
/// atomically only when the bytes differ.
///
/// The caller is expected to have validated `path` against the capture root
/// already. Missing parent directories are created; a write failure leaves
/// any previous capture intact.
pub fn write_if_changed(path: &Path, content: &[u8]) -> Result<CaptureOutcome> {
    match fs::read(path) {
        Ok(existing) if existing == content => return Ok(CaptureOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("read existing capture: {}", path.display()))
        }
    }

    writer::replace_file(path, content)?;
    Ok(CaptureOutcome::Changed)
}

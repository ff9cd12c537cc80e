//! Sequential capture pass over the expanded target list.
//!
//! Each target runs its own validate → fetch → check → write cycle; a
//! failure is recorded and the pass moves on. Only setup errors (capture
//! root creation) abort the whole run, so previously captured data is never
//! lost to one bad source.

mod report;

pub use report::{ChangedCapture, RunReport, TargetFailure};

use crate::capture::{self, CaptureOutcome};
use crate::checksum;
use crate::config::CaptureConfig;
use crate::feed_xml;
use crate::fetch_feed;
use crate::safe_path;
use crate::targets::{self, CaptureTarget};
use anyhow::{Context, Result};
use std::fs;
use std::time::Duration;

/// Options for one capture pass.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Process only the first N expanded targets (test mode).
    pub limit: Option<usize>,
}

enum Captured {
    Changed { sha256: String },
    Unchanged,
}

/// Runs a full capture pass over the configured targets.
pub fn run_capture(cfg: &CaptureConfig, opts: &RunOptions) -> Result<RunReport> {
    let today = targets::today_utc();
    let mut expanded = targets::expand_targets(&cfg.defs, &cfg.targets, &today);
    if let Some(limit) = opts.limit {
        expanded.truncate(limit);
    }

    fs::create_dir_all(&cfg.capture_dir)
        .with_context(|| format!("create capture dir: {}", cfg.capture_dir.display()))?;

    let mut report = RunReport::default();
    if expanded.is_empty() {
        tracing::info!("no targets to process");
        return Ok(report);
    }
    tracing::info!("processing {} target(s)", expanded.len());

    for (index, target) in expanded.iter().enumerate() {
        if index > 0 {
            if let Some(secs) = cfg.delay_secs {
                std::thread::sleep(Duration::from_secs_f64(secs));
            }
        }

        tracing::info!(url = %target.url, filepath = %target.filepath, "processing target");
        match capture_one(cfg, target) {
            Ok(Captured::Changed { sha256 }) => {
                tracing::info!(filepath = %target.filepath, %sha256, "capture updated");
                report.changed.push(ChangedCapture {
                    filepath: target.filepath.clone(),
                    sha256,
                });
            }
            Ok(Captured::Unchanged) => {
                tracing::debug!(filepath = %target.filepath, "capture unchanged");
                report.unchanged += 1;
            }
            Err(err) => {
                let error = format!("{err:#}");
                tracing::warn!(url = %target.url, %error, "target failed");
                report.failures.push(TargetFailure {
                    url: target.url.clone(),
                    filepath: target.filepath.clone(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

fn capture_one(cfg: &CaptureConfig, target: &CaptureTarget) -> Result<Captured> {
    if target.filepath.is_empty() {
        anyhow::bail!("target for {} has an empty filepath", target.url);
    }
    let path = cfg.capture_dir.join(&target.filepath);

    // The destination comes from config templates; nothing outside the
    // capture root may ever be written.
    if !safe_path::is_safe_path(&cfg.capture_dir, &path)? {
        anyhow::bail!("unsafe filepath: {}", path.display());
    }

    if let Some(allowed) = &cfg.allowed_hosts {
        fetch_feed::ensure_host_allowed(&target.url, allowed)?;
    }

    let body = fetch_feed::fetch(&target.url)?;
    let minified = feed_xml::validate_and_minify(&body)
        .with_context(|| format!("payload from {} rejected", target.url))?;

    match capture::write_if_changed(&path, minified.as_bytes())? {
        CaptureOutcome::Changed => Ok(Captured::Changed {
            sha256: checksum::sha256_bytes(minified.as_bytes()),
        }),
        CaptureOutcome::Unchanged => Ok(Captured::Unchanged),
    }
}

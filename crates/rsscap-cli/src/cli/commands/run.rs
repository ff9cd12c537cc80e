//! `rsscap run` – fetch all configured feeds and update changed captures.

use anyhow::Result;
use chrono::Utc;
use rsscap_core::config;
use rsscap_core::notify::TelegramNotifier;
use rsscap_core::run::{self, RunOptions};
use std::path::Path;

pub fn run_capture(config_path: &Path, limit: Option<usize>, no_notify: bool) -> Result<()> {
    let cfg = config::load_or_init(config_path)?;
    tracing::debug!("loaded config: {:?}", cfg);

    let report = run::run_capture(&cfg, &RunOptions { limit })?;

    println!(
        "{} updated, {} unchanged, {} failed",
        report.changed.len(),
        report.unchanged,
        report.failures.len()
    );
    for f in &report.failures {
        println!("  failed {} -> {}: {}", f.url, f.filepath, f.error);
    }

    if no_notify {
        return Ok(());
    }
    match TelegramNotifier::from_env() {
        Some(notifier) => {
            if let Some(text) = report.summary(Utc::now()) {
                if let Err(err) = notifier.send_message(&text) {
                    tracing::warn!("could not send Telegram notification: {err}");
                }
            }
        }
        None => tracing::debug!("Telegram notifier not configured; skipping notification"),
    }
    Ok(())
}

//! `rsscap plan` – print the expanded target list without fetching.

use anyhow::Result;
use rsscap_core::config;
use rsscap_core::targets;
use std::path::Path;

pub fn run_plan(config_path: &Path) -> Result<()> {
    let cfg = config::load_from_path(config_path)?;
    let today = targets::today_utc();
    let expanded = targets::expand_targets(&cfg.defs, &cfg.targets, &today);

    if expanded.is_empty() {
        println!("No targets configured.");
        return Ok(());
    }
    for t in &expanded {
        println!("{} -> {}", t.url, cfg.capture_dir.join(&t.filepath).display());
    }
    Ok(())
}

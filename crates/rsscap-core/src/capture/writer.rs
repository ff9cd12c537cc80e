//! Atomic whole-file replacement for capture files.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temp file name used while replacing a capture (e.g. `feedA.xml.part`).
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Writes `content` to `path` via a temp file in the same directory and an
/// atomic rename. The previous file stays intact if any step fails.
pub(crate) fn replace_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
    }

    let temp = part_path(path);
    let result = write_and_rename(&temp, path, content);
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

fn write_and_rename(temp: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)
        .with_context(|| format!("failed to create temp file: {}", temp.display()))?;
    file.write_all(content)
        .with_context(|| format!("write {}", temp.display()))?;
    file.sync_all().context("capture sync failed")?;
    drop(file);

    fs::rename(temp, path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            temp.display(),
            path.display()
        )
    })?;
    Ok(())
}

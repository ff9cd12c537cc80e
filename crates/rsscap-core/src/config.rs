use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A template variable: a single value, or a list that is expanded into the
/// cartesian product of all list-valued variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    One(String),
    Many(Vec<String>),
}

/// One capture target: URL and destination path templates, plus optional
/// per-target variables (fixed or list-valued).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    /// URL template; may reference `defs` variables, target variables, and `{base}`.
    pub url: String,
    /// Destination path template, relative to `capture_dir`.
    pub filepath: String,
    /// Per-target variables merged over `defs` for this target.
    #[serde(default)]
    pub vars: BTreeMap<String, VarValue>,
}

/// Job configuration loaded from a TOML file in the captured repository
/// (default `feeds.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Directory all captures are written under. Every destination path must
    /// resolve inside it.
    #[serde(default = "default_capture_dir")]
    pub capture_dir: PathBuf,
    /// If set, only URLs whose host appears here are fetched.
    #[serde(default)]
    pub allowed_hosts: Option<Vec<String>>,
    /// Optional pause between fetches, in seconds.
    #[serde(default)]
    pub delay_secs: Option<f64>,
    /// Shared template variables. The `base` entry, if present, is itself a
    /// template resolved against the other variables.
    #[serde(default)]
    pub defs: BTreeMap<String, VarValue>,
    /// Capture targets.
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetSpec>,
}

fn default_capture_dir() -> PathBuf {
    PathBuf::from("rss")
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_dir: default_capture_dir(),
            allowed_hosts: None,
            delay_secs: None,
            defs: BTreeMap::new(),
            targets: Vec::new(),
        }
    }
}

/// Load configuration from `path`.
pub fn load_from_path(path: &Path) -> Result<CaptureConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: CaptureConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init(path: &Path) -> Result<CaptureConfig> {
    if !path.exists() {
        let default_cfg = CaptureConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(path)
}

//! Error type for destination path checks.

use std::path::PathBuf;
use thiserror::Error;

/// Resolution failure while checking a destination path. A failed check is
/// treated like an unsafe path by callers; nothing is written.
#[derive(Debug, Error)]
pub enum PathCheckError {
    #[error("capture root {path} cannot be resolved: {source}")]
    BaseDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("candidate path {path} cannot be resolved: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

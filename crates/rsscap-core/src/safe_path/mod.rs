//! Destination path validation against the capture root.
//!
//! Destination paths come from config templates and are treated as untrusted.
//! A candidate is safe only when its resolved form stays inside the
//! canonicalized capture root: symlinks in the existing part of the path are
//! followed, and `..` segments in the not-yet-existing tail are applied
//! lexically before the containment check.

mod error;

pub use error::PathCheckError;

use std::io;
use std::path::{Component, Path, PathBuf};

/// Returns true if `candidate` resolves to the canonical `base_dir` or a
/// descendant of it.
///
/// `base_dir` must exist; `candidate` may not exist yet. No side effects.
pub fn is_safe_path(base_dir: &Path, candidate: &Path) -> Result<bool, PathCheckError> {
    let base = base_dir
        .canonicalize()
        .map_err(|source| PathCheckError::BaseDir {
            path: base_dir.to_path_buf(),
            source,
        })?;
    let resolved = resolve(candidate).map_err(|source| PathCheckError::Resolve {
        path: candidate.to_path_buf(),
        source,
    })?;
    Ok(resolved.starts_with(&base))
}

/// Resolves `candidate` like `realpath` for paths that may not exist yet:
/// the longest existing prefix is canonicalized (following symlinks), then
/// the remaining components are applied lexically on top of it.
fn resolve(candidate: &Path) -> io::Result<PathBuf> {
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        std::env::current_dir()?.join(candidate)
    };

    let mut prefix = absolute.as_path();
    let mut stripped = 0usize;
    let resolved_prefix = loop {
        match prefix.canonicalize() {
            Ok(p) => break p,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                match prefix.parent() {
                    Some(parent) => {
                        stripped += 1;
                        prefix = parent;
                    }
                    // Only the filesystem root has no parent, and it always
                    // canonicalizes; treat this as the root to be safe.
                    None => break PathBuf::from("/"),
                }
            }
            Err(e) => return Err(e),
        }
    };

    let components: Vec<Component<'_>> = absolute.components().collect();
    let tail = &components[components.len() - stripped..];

    let mut resolved = resolved_prefix;
    for component in tail {
        match component {
            Component::Normal(name) => resolved.push(name),
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Ok(resolved)
}

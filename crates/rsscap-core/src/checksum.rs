//! Capture content digests.
//!
//! Changed captures are logged and reported with their SHA-256 so a run's
//! output can be tied to the exact bytes that were stored.

use sha2::{Digest, Sha256};

/// Compute SHA-256 of `content` and return the digest as lowercase hex.
pub fn sha256_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

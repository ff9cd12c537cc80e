//! Error types for feed fetching.

use thiserror::Error;

/// A fetch failure for one target. Recoverable at per-target granularity;
/// the run continues with the remaining targets.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),

    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("host {host:?} is not in allowed_hosts for {url}")]
    HostNotAllowed { url: String, host: String },
}

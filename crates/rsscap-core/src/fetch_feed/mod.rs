//! Feed fetching over HTTP.
//!
//! Uses the curl crate (libcurl) for one GET per target: follows redirects,
//! bounded timeouts, and a browser User-Agent. No retry loop; a failure is
//! reported to the caller, which skips that source for the run.

mod error;

pub use error::FetchError;

use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Some feed hosts serve an HTML shell to unknown clients; present a
/// mainstream mobile browser instead.
const USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_6_1 like Mac OS X) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Mobile/15E148 Safari/604.1 OPT/5.0.5";

/// Performs a single GET and returns the response body as text.
///
/// Content is treated as opaque here; well-formedness is checked by
/// `feed_xml` before anything is stored.
pub fn fetch(url: &str) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(USER_AGENT)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(REQUEST_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    Ok(String::from_utf8(body)?)
}

/// Rejects URLs whose host is not in `allowed`. Comparison is
/// case-insensitive on the host only; scheme and path are not restricted.
pub fn ensure_host_allowed(url: &str, allowed: &[String]) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url)?;
    let host = parsed.host_str().unwrap_or_default();
    if allowed.iter().any(|h| h.eq_ignore_ascii_case(host)) {
        Ok(())
    } else {
        Err(FetchError::HostNotAllowed {
            url: url.to_string(),
            host: host.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_allowed_match() {
        let allowed = vec!["www.example.com".to_string()];
        assert!(ensure_host_allowed("https://www.example.com/feed.xml", &allowed).is_ok());
    }

    #[test]
    fn host_allowed_case_insensitive() {
        let allowed = vec!["WWW.Example.COM".to_string()];
        assert!(ensure_host_allowed("https://www.example.com/feed.xml", &allowed).is_ok());
    }

    #[test]
    fn host_not_allowed() {
        let allowed = vec!["www.example.com".to_string()];
        let err = ensure_host_allowed("https://evil.example.org/feed.xml", &allowed).unwrap_err();
        assert!(matches!(err, FetchError::HostNotAllowed { .. }));
    }

    #[test]
    fn unparseable_url_is_err() {
        let allowed = vec!["www.example.com".to_string()];
        assert!(ensure_host_allowed("not a url", &allowed).is_err());
    }
}

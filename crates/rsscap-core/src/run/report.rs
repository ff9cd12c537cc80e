//! Run outcome accounting and the notification summary.

use chrono::{DateTime, Utc};

/// A capture whose stored bytes changed this run.
#[derive(Debug, Clone)]
pub struct ChangedCapture {
    pub filepath: String,
    pub sha256: String,
}

/// One target that could not be captured this run.
#[derive(Debug, Clone)]
pub struct TargetFailure {
    pub url: String,
    pub filepath: String,
    pub error: String,
}

/// Outcome of a full capture pass.
#[derive(Debug, Default)]
pub struct RunReport {
    pub changed: Vec<ChangedCapture>,
    pub unchanged: usize,
    pub failures: Vec<TargetFailure>,
}

impl RunReport {
    /// Markdown summary for the notifier, or None when there is nothing
    /// worth a message (no changes, no failures).
    pub fn summary(&self, finished_at: DateTime<Utc>) -> Option<String> {
        if self.changed.is_empty() && self.failures.is_empty() {
            return None;
        }
        let mut lines = vec![format!(
            "*rsscap run* ({} UTC): {} updated, {} unchanged, {} failed",
            finished_at.format("%Y-%m-%d %H:%M:%S"),
            self.changed.len(),
            self.unchanged,
            self.failures.len(),
        )];
        for c in &self.changed {
            lines.push(format!("- updated `{}` ({})", c.filepath, &c.sha256[..12]));
        }
        for f in &self.failures {
            lines.push(format!("- failed `{}` for `{}`: {}", f.url, f.filepath, f.error));
        }
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 6, 30, 0).unwrap()
    }

    #[test]
    fn quiet_run_has_no_summary() {
        let report = RunReport {
            unchanged: 3,
            ..Default::default()
        };
        assert!(report.summary(at()).is_none());
    }

    #[test]
    fn summary_lists_changes_and_failures() {
        let report = RunReport {
            changed: vec![ChangedCapture {
                filepath: "en/ai.xml".into(),
                sha256: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
                    .into(),
            }],
            unchanged: 1,
            failures: vec![TargetFailure {
                url: "https://example.com/feed".into(),
                filepath: "en/feed.xml".into(),
                error: "GET https://example.com/feed returned HTTP 500".into(),
            }],
        };
        let text = report.summary(at()).unwrap();
        assert!(text.starts_with("*rsscap run* (2026-08-07 06:30:00 UTC)"));
        assert!(text.contains("1 updated, 1 unchanged, 1 failed"));
        assert!(text.contains("- updated `en/ai.xml` (e3b0c44298fc)"));
        assert!(text.contains("- failed `https://example.com/feed` for `en/feed.xml`"));
    }
}

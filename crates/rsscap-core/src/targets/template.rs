//! Variable substitution for URL and filepath templates.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\{([^}]+)\}").expect("valid regex"));

/// Replaces `{name}` and `${name}` occurrences with values from `vars`.
///
/// Unknown variables are left verbatim so a malformed template is visible in
/// the expanded output instead of silently collapsing to an empty string.
pub fn substitute(template: &str, vars: &BTreeMap<String, String>) -> String {
    VAR_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            vars.get(name)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

//! Tests for target expansion.

use super::{expand_targets, CaptureTarget};
use crate::config::{TargetSpec, VarValue};
use std::collections::BTreeMap;

fn defs(entries: &[(&str, VarValue)]) -> BTreeMap<String, VarValue> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn target(url: &str, filepath: &str, vars: &[(&str, VarValue)]) -> TargetSpec {
    TargetSpec {
        url: url.to_string(),
        filepath: filepath.to_string(),
        vars: defs(vars),
    }
}

#[test]
fn fixed_defs_and_base() {
    let d = defs(&[("base", VarValue::One("https://example.com/feed".into()))]);
    let t = [target("${base}?day={today}", "daily/{today}.xml", &[])];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    assert_eq!(
        expanded,
        vec![CaptureTarget {
            url: "https://example.com/feed?day=2026-08-07".into(),
            filepath: "daily/2026-08-07.xml".into(),
        }]
    );
}

#[test]
fn base_template_uses_other_defs() {
    let d = defs(&[
        ("base", VarValue::One("https://{host}/feed".into())),
        ("host", VarValue::One("example.com".into())),
    ]);
    let t = [target("{base}", "feed.xml", &[])];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    assert_eq!(expanded[0].url, "https://example.com/feed");
}

#[test]
fn list_defs_expose_singular_name() {
    let d = defs(&[
        ("base", VarValue::One("https://example.com".into())),
        ("langs", VarValue::Many(vec!["en".into(), "ja".into()])),
    ]);
    let t = [target("{base}/feed?lang={lang}", "{lang}/feed.xml", &[])];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    let paths: Vec<&str> = expanded.iter().map(|t| t.filepath.as_str()).collect();
    assert_eq!(paths, ["en/feed.xml", "ja/feed.xml"]);
}

#[test]
fn defs_and_target_lists_multiply() {
    let d = defs(&[("langs", VarValue::Many(vec!["en".into(), "ja".into()]))]);
    let t = [target(
        "https://example.com/{lang}/{category}",
        "{lang}/{category}.xml",
        &[(
            "category",
            VarValue::Many(vec!["ai".into(), "games".into()]),
        )],
    )];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    assert_eq!(expanded.len(), 4);
    assert!(expanded.iter().any(|t| t.filepath == "en/ai.xml"));
    assert!(expanded.iter().any(|t| t.filepath == "ja/games.xml"));
}

#[test]
fn target_vars_override_defs() {
    let d = defs(&[("feed", VarValue::One("global".into()))]);
    let t = [target(
        "https://example.com/{feed}",
        "{feed}.xml",
        &[("feed", VarValue::One("local".into()))],
    )];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    assert_eq!(expanded[0].filepath, "local.xml");
}

#[test]
fn no_defs_single_combination() {
    let d = defs(&[]);
    let t = [target("https://example.com/a.xml", "a.xml", &[])];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    assert_eq!(expanded.len(), 1);
}

#[test]
fn empty_list_yields_no_targets() {
    let d = defs(&[("langs", VarValue::Many(vec![]))]);
    let t = [target("https://example.com/{lang}", "{lang}.xml", &[])];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    assert!(expanded.is_empty());
}

#[test]
fn unknown_variable_survives_expansion() {
    let d = defs(&[]);
    let t = [target("https://example.com/{oops}", "{oops}.xml", &[])];
    let expanded = expand_targets(&d, &t, "2026-08-07");
    assert_eq!(expanded[0].filepath, "{oops}.xml");
}

//! Expands configured target templates into concrete capture targets.
//!
//! `defs` holds shared variables; list-valued variables (in `defs` or in a
//! target's `vars`) multiply into the cartesian product of their values. A
//! list variable from `defs` is exposed to templates under its singular name
//! (`langs` provides `{lang}`), and the `base` entry of `defs` is itself a
//! template resolved against the current combination.

mod template;

pub use template::substitute;

use crate::config::{TargetSpec, VarValue};
use std::collections::BTreeMap;

/// A fully expanded capture target: concrete URL and capture-root-relative
/// destination path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    pub url: String,
    pub filepath: String,
}

/// UTC date for the built-in `today` template variable.
pub fn today_utc() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Expands `targets` against `defs`, producing one `CaptureTarget` per
/// combination of list-valued variables. `today` is exposed to all templates.
pub fn expand_targets(
    defs: &BTreeMap<String, VarValue>,
    targets: &[TargetSpec],
    today: &str,
) -> Vec<CaptureTarget> {
    let mut fixed_defs: BTreeMap<String, String> = BTreeMap::new();
    let mut list_defs: Vec<(String, &[String])> = Vec::new();
    for (key, value) in defs {
        match value {
            VarValue::One(s) => {
                fixed_defs.insert(key.clone(), s.clone());
            }
            VarValue::Many(vs) => list_defs.push((singular_name(key), vs.as_slice())),
        }
    }

    let base_template = match defs.get("base") {
        Some(VarValue::One(s)) => s.clone(),
        _ => String::new(),
    };

    let mut expanded = Vec::new();
    for defs_combo in combinations(&list_defs) {
        let mut base_vars = fixed_defs.clone();
        base_vars.extend(defs_combo);
        base_vars.insert("today".to_string(), today.to_string());
        let base = substitute(&base_template, &base_vars);
        base_vars.insert("base".to_string(), base);

        for target in targets {
            let mut fixed_target: BTreeMap<String, String> = BTreeMap::new();
            let mut list_target: Vec<(String, &[String])> = Vec::new();
            for (key, value) in &target.vars {
                match value {
                    VarValue::One(s) => {
                        fixed_target.insert(key.clone(), s.clone());
                    }
                    VarValue::Many(vs) => list_target.push((key.clone(), vs.as_slice())),
                }
            }

            for target_combo in combinations(&list_target) {
                let mut all_vars = base_vars.clone();
                all_vars.extend(fixed_target.clone());
                all_vars.extend(target_combo);
                expanded.push(CaptureTarget {
                    url: substitute(&target.url, &all_vars),
                    filepath: substitute(&target.filepath, &all_vars),
                });
            }
        }
    }
    expanded
}

/// Template name for a list variable: `langs` exposes `{lang}`.
fn singular_name(key: &str) -> String {
    match key.strip_suffix('s') {
        Some(stripped) if key.len() > 1 => stripped.to_string(),
        _ => key.to_string(),
    }
}

/// Cartesian product over named value lists. With no lists, yields one empty
/// combination; an empty list yields none.
fn combinations(lists: &[(String, &[String])]) -> Vec<BTreeMap<String, String>> {
    let mut combos: Vec<BTreeMap<String, String>> = vec![BTreeMap::new()];
    for (name, values) in lists {
        let mut next = Vec::with_capacity(combos.len() * values.len());
        for combo in &combos {
            for value in *values {
                let mut c = combo.clone();
                c.insert(name.clone(), value.clone());
                next.push(c);
            }
        }
        combos = next;
    }
    combos
}

#[cfg(test)]
mod tests;

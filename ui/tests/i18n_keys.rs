//! Guards for the Fluent catalogues under `ui/i18n/`.
//!
//! - every `t!("…")` key used in `src/` exists in the fallback (en-US)
//! - every locale defines exactly the fallback's keys, once each
//! - every translation uses the same `{ $variables }` as the fallback
//!
//! The parser is deliberately small: a message is any unindented line of the
//! form `key = …`. Comments, terms (`-term`) and attributes are skipped.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "hemascope-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn valid_key(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

/// Message id → the variables its value references, plus ids seen twice.
fn parse_messages(content: &str) -> (BTreeMap<String, BTreeSet<String>>, Vec<String>) {
    let mut messages = BTreeMap::new();
    let mut duplicates = Vec::new();

    for line in content.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if !valid_key(id) {
            continue;
        }
        if messages.insert(id.to_string(), variables(value)).is_some() {
            duplicates.push(id.to_string());
        }
    }

    (messages, duplicates)
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_whitespace().next())
        .map(|name| name.trim_end_matches('}').to_string())
        .collect()
}

fn load_locale(locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    let (messages, duplicates) = parse_messages(&content);
    assert!(
        duplicates.is_empty(),
        "{locale} defines keys more than once: {duplicates:?}"
    );
    messages
}

fn locales() -> Vec<String> {
    let mut found: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    found.sort();
    found
}

/// Literal first arguments of `t!(` calls in every `.rs` file under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).into_iter().flatten().flatten() {
                stack.push(entry.path());
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if valid_key(key) {
                    keys.insert(key.to_string());
                }
            }
        }
    }

    keys
}

#[test]
fn fallback_covers_every_referenced_key() {
    let fallback = load_locale(FALLBACK);
    let used = referenced_keys(&crate_root().join("src"));
    assert!(!used.is_empty(), "no t!() calls found; did the scan break?");

    let missing: Vec<_> = used.iter().filter(|k| !fallback.contains_key(*k)).collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK}: {missing:?}"
    );
}

#[test]
fn locales_match_fallback_keys() {
    let fallback = load_locale(FALLBACK);
    let all = locales();
    assert!(all.iter().any(|l| l == FALLBACK), "fallback locale missing");

    let mut report = Vec::new();
    for locale in all.iter().filter(|l| *l != FALLBACK) {
        let messages = load_locale(locale);
        let missing: Vec<_> = fallback.keys().filter(|k| !messages.contains_key(*k)).collect();
        let extra: Vec<_> = messages.keys().filter(|k| !fallback.contains_key(*k)).collect();
        if !missing.is_empty() || !extra.is_empty() {
            report.push(format!("{locale}: missing {missing:?}, extra {extra:?}"));
        }
    }

    assert!(report.is_empty(), "locale drift:\n{}", report.join("\n"));
}

#[test]
fn translations_keep_placeables() {
    let fallback = load_locale(FALLBACK);

    for locale in locales().iter().filter(|l| *l != FALLBACK) {
        for (key, vars) in load_locale(locale) {
            if let Some(expected) = fallback.get(&key) {
                assert_eq!(&vars, expected, "{locale}/{key} changes its variables");
            }
        }
    }
}

#[test]
fn parser_reads_variables() {
    let (messages, duplicates) =
        parse_messages("# c\nmsg = { $a } of { $b }\n  .attr = x\n-term = y\nmsg = again\n");
    assert_eq!(duplicates, ["msg"]);
    assert_eq!(messages.len(), 1);
    assert!(messages["msg"].is_empty());

    let (messages, _) = parse_messages("count = { $flagged } of { $total } biomarkers\n");
    assert_eq!(
        messages["count"],
        BTreeSet::from(["flagged".to_string(), "total".to_string()])
    );
}

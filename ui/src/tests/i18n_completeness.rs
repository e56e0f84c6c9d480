//! Every literal key passed to `AppContext::t` in the sources must resolve in
//! every language. Keys reached through tables (`Page::label_key`, `STATS`,
//! `CONTACT_CHANNELS`) are checked by the tests next to those tables.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Language;
use crate::i18n::TranslationTable;

const CALL: &str = ".t(\"";

fn is_key(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Literal keys of every `.t("...")` call in `source`.
fn literal_keys(source: &str) -> impl Iterator<Item = &str> {
    source.match_indices(CALL).filter_map(|(at, _)| {
        let rest = &source[at + CALL.len()..];
        let key = &rest[..rest.find('"')?];
        is_key(key).then_some(key)
    })
}

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn literal_keys_skip_non_identifiers() {
    let source = r#"app.t("nav_home"); app.t("..."); app.t(key); app.t("hero_desc")"#;
    let keys: Vec<_> = literal_keys(source).collect();
    assert_eq!(keys, ["nav_home", "hero_desc"]);
}

#[test]
fn every_literal_key_resolves_in_every_language() {
    let mut files = Vec::new();
    rust_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut used = BTreeSet::new();
    for file in &files {
        let source = fs::read_to_string(file).unwrap_or_default();
        used.extend(literal_keys(&source).map(str::to_owned));
    }
    assert!(used.contains("nav_cta"), "scan found no navbar keys");

    let table = TranslationTable::embedded();
    let mut missing = Vec::new();
    for lang in Language::ALL {
        for key in used.iter().filter(|key| !table.contains(lang, key)) {
            missing.push(format!("{lang}/{key}"));
        }
    }

    assert!(
        missing.is_empty(),
        "keys used in sources but missing from a locale:\n  {}",
        missing.join("\n  ")
    );
}

//! Internationalization (i18n) support for `kraken-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message parsing + formatting, one bundle per language)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   uz-UZ/kraken-ui.ftl   (default language)
//!   ru-RU/kraken-ui.ftl
//!   en-US/kraken-ui.ftl
//! ```
//!
//! Lookup is strictly per language. A key missing from a locale resolves to
//! the key literal, never to another locale's text, so gaps show up on the
//! page instead of silently borrowing a translation.
//!
//! Usage in a component (the table lives in `AppContext`):
//! ```ignore
//! let app = use_app();
//! let home_label = app.t("nav_home");
//! ```
//!
//! To add a message: add `key = text` to every locale file. The completeness
//! tests fail if a locale is missing a key or a source file references an
//! unknown one.
//!
//! Domain records (services, team, interview steps) do not go through this
//! table; they carry their own per-language fields (see `crate::content`).
use std::collections::HashMap;

use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;
use tracing::{debug, warn};

use crate::core::Language;

/// Canonical message file name inside every locale folder.
pub const DOMAIN_FILE: &str = "kraken-ui.ftl";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Language → key → text, built once and never mutated.
pub struct TranslationTable {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl TranslationTable {
    /// Build the table from the embedded `.ftl` files.
    pub fn embedded() -> Self {
        let sources = Language::ALL.into_iter().filter_map(|lang| {
            let path = format!("{}/{DOMAIN_FILE}", lang.locale_dir());
            let Some(file) = Localizations::get(&path) else {
                warn!(target: "i18n", "no messages embedded for {lang} ({path})");
                return None;
            };
            match String::from_utf8(file.data.into_owned()) {
                Ok(src) => Some((lang, src)),
                Err(err) => {
                    warn!(target: "i18n", "{path} is not valid UTF-8: {err}");
                    None
                }
            }
        });
        Self::from_sources(sources)
    }

    /// Build a table from raw Fluent sources.
    ///
    /// Unparsable entries are skipped (and logged); the rest of the source is
    /// still used. Several sources for one language are merged, first
    /// definition wins.
    pub fn from_sources<S: Into<String>>(sources: impl IntoIterator<Item = (Language, S)>) -> Self {
        let mut bundles: HashMap<Language, FluentBundle<FluentResource>> = HashMap::new();

        for (lang, src) in sources {
            let resource = match FluentResource::try_new(src.into()) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    warn!(
                        target: "i18n",
                        "{} parse error(s) in {lang} messages; keeping the parsable entries",
                        errors.len()
                    );
                    resource
                }
            };

            let bundle = bundles.entry(lang).or_insert_with(|| new_bundle(lang));
            if let Err(errors) = bundle.add_resource(resource) {
                for err in errors {
                    warn!(target: "i18n", "{lang}: {err}");
                }
            }
        }

        debug!(target: "i18n", languages = bundles.len(), "translation table loaded");
        Self { bundles }
    }

    /// Localized text for `key`, or `key` itself when `language` has no such
    /// message.
    pub fn resolve(&self, language: Language, key: &str) -> String {
        let Some(bundle) = self.bundles.get(&language) else {
            return key.to_string();
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return key.to_string();
        };

        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errors);
        for err in errors {
            warn!(target: "i18n", "{language}/{key}: {err}");
        }
        text.into_owned()
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.bundles
            .get(&language)
            .is_some_and(|bundle| bundle.has_message(key))
    }
}

fn new_bundle(lang: Language) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![lang.identifier()]);
    // Plain UI copy; no bidi isolation marks around placeables.
    bundle.set_use_isolating(false);
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Locale folders present in the embedded assets.
    fn embedded_locales() -> Vec<String> {
        let mut locales = Localizations::iter()
            .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
            .collect::<Vec<_>>();
        locales.sort();
        locales.dedup();
        locales
    }

    #[test]
    fn every_language_has_an_embedded_file() {
        let locales = embedded_locales();
        for lang in Language::ALL {
            assert!(
                locales.iter().any(|l| l == lang.locale_dir()),
                "missing embedded locale {}",
                lang.locale_dir()
            );
        }
    }

    #[test]
    fn basic_lookup_works() {
        let table = TranslationTable::embedded();
        assert_eq!(table.resolve(Language::En, "nav_home"), "Home");
        assert_eq!(table.resolve(Language::Ru, "nav_home"), "Главная");
        assert_eq!(table.resolve(Language::Uz, "nav_home"), "Bosh sahifa");
    }

    #[test]
    fn missing_key_resolves_to_itself() {
        let table = TranslationTable::embedded();
        for lang in Language::ALL {
            assert_eq!(table.resolve(lang, "no_such_key"), "no_such_key");
            assert_eq!(table.resolve(lang, "no_such_key"), "no_such_key");
        }
    }

    #[test]
    fn no_cross_language_fallback() {
        let table = TranslationTable::from_sources([
            (Language::En, "only_en = English only\nshared = Shared EN"),
            (Language::Ru, "shared = Общий"),
        ]);

        assert_eq!(table.resolve(Language::En, "only_en"), "English only");
        assert_eq!(table.resolve(Language::Ru, "only_en"), "only_en");
        assert_eq!(table.resolve(Language::Uz, "only_en"), "only_en");
        assert_eq!(table.resolve(Language::Ru, "shared"), "Общий");
        assert!(table.contains(Language::En, "only_en"));
        assert!(!table.contains(Language::Ru, "only_en"));
    }

    #[test]
    fn broken_entries_do_not_sink_the_file() {
        let table = TranslationTable::from_sources([(
            Language::En,
            "good = Fine\nbad = { unterminated\nalso_good = Still fine",
        )]);

        assert_eq!(table.resolve(Language::En, "good"), "Fine");
        assert_eq!(table.resolve(Language::En, "also_good"), "Still fine");
        assert_eq!(table.resolve(Language::En, "bad"), "bad");
    }

    #[test]
    fn first_definition_wins_on_merge() {
        let table = TranslationTable::from_sources([
            (Language::Uz, "greeting = Salom"),
            (Language::Uz, "greeting = Assalomu alaykum\nfarewell = Xayr"),
        ]);
        assert_eq!(table.resolve(Language::Uz, "greeting"), "Salom");
        assert_eq!(table.resolve(Language::Uz, "farewell"), "Xayr");
    }
}

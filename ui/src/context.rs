//! Shared application context: the one preference store plus the translation
//! table, handed to every component through Dioxus context.
//!
//! `AppProvider` builds both exactly once at the root. Components reach them
//! through `use_app()`, which panics when no provider is mounted above the
//! caller.

use dioxus::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::{default_storage, Language, PreferenceStore, StorageHandle, Theme};
use crate::i18n::TranslationTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("use_app must be used within AppProvider")]
    OutsideProvider,
}

/// Copyable handle to the application's preferences and translations.
///
/// Reads subscribe the calling component, so a language or theme switch
/// re-renders every consumer.
#[derive(Clone, Copy)]
pub struct AppContext {
    store: Signal<PreferenceStore>,
    table: CopyValue<TranslationTable>,
}

impl AppContext {
    pub fn language(&self) -> Language {
        self.store.read().language()
    }

    pub fn set_language(mut self, language: Language) {
        info!(target: "prefs", %language, "language switched");
        self.store.write().set_language(language);
    }

    /// Apply a language code coming from a `<select>`.
    ///
    /// Codes outside the supported set are a caller bug: debug builds panic,
    /// release builds log and keep the current language.
    pub fn select_language(self, code: &str) {
        match code.parse::<Language>() {
            Ok(language) => self.set_language(language),
            Err(err) => {
                if cfg!(debug_assertions) {
                    panic!("{err}");
                }
                warn!(target: "prefs", "ignoring language selection: {err}");
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.store.read().theme()
    }

    /// Switch theme and persist it. The root class follows on the same render.
    pub fn set_theme(mut self, theme: Theme) {
        info!(target: "prefs", %theme, "theme switched");
        self.store.write().set_theme(theme);
    }

    pub fn toggle_theme(mut self) -> Theme {
        let theme = self.store.write().toggle_theme();
        info!(target: "prefs", %theme, "theme switched");
        theme
    }

    /// Localized text for `key` in the current language, or `key` itself.
    pub fn t(&self, key: &str) -> String {
        let language = self.language();
        self.table.read().resolve(language, key)
    }
}

/// Accessor for the shared context. Panics outside `AppProvider`.
pub fn use_app() -> AppContext {
    match try_use_app() {
        Ok(app) => app,
        Err(err) => panic!("{err}"),
    }
}

pub fn try_use_app() -> Result<AppContext, ContextError> {
    try_use_context::<AppContext>().ok_or(ContextError::OutsideProvider)
}

/// Root provider. Opens the preference store (from `storage`, or the
/// platform default) and loads the translation table, once.
#[component]
pub fn AppProvider(storage: Option<StorageHandle>, children: Element) -> Element {
    let store = use_signal(move || PreferenceStore::open(storage.unwrap_or_else(default_storage)));
    let table = use_hook(|| CopyValue::new(TranslationTable::embedded()));
    let app = use_context_provider(|| AppContext { store, table });

    // Mirror onto <html> so page background and scrollbars follow too.
    use_effect(move || {
        mirror_on_document(app.theme(), app.language());
    });

    let theme = app.theme();
    let language = app.language();

    rsx! {
        div {
            class: "app {theme.css_class()}",
            lang: language.html_lang(),
            {children}
        }
    }
}

fn mirror_on_document(theme: Theme, language: Language) {
    let script = format!(
        "const root = document.documentElement;\
         root.classList.toggle('light', {light});\
         root.dataset.theme = '{theme}';\
         root.lang = '{lang}';",
        light = theme == Theme::Light,
        theme = theme.as_str(),
        lang = language.html_lang(),
    );
    let _ = document::eval(&script);
}

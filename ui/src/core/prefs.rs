//! Preference store: active language and theme, with the theme persisted.
//!
//! This is the plain-data half of the preference state. It knows nothing about
//! Dioxus; `crate::context` wraps it in a signal and shares it with the
//! component tree.

use tracing::{debug, warn};

use super::language::Language;
use super::storage::StorageHandle;
use super::theme::Theme;

/// Storage key holding the theme literal (`"dark"` / `"light"`).
pub const THEME_STORAGE_KEY: &str = "theme";

pub struct PreferenceStore {
    language: Language,
    theme: Theme,
    storage: StorageHandle,
}

impl PreferenceStore {
    /// Restore preferences from `storage`.
    ///
    /// Only the theme is persisted; a missing or unrecognised value falls back
    /// to the default. Language always starts at its default.
    pub fn open(storage: StorageHandle) -> Self {
        let theme = match storage.get(THEME_STORAGE_KEY) {
            None => Theme::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!(target: "prefs", "discarding stored theme: {err}");
                Theme::default()
            }),
        };
        debug!(target: "prefs", %theme, "preferences restored");

        Self {
            language: Language::default(),
            theme,
            storage,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language for the rest of the session. Not persisted.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme and persist it. A failed write is logged; the in-memory
    /// theme still changes.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(err) = self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            warn!(target: "prefs", "failed to persist theme `{theme}`: {err}");
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }
}

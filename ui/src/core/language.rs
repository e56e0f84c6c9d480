//! Supported display languages.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// UI display locale. The set is closed; new locales need a variant here and
/// a matching `i18n/<locale>/kraken-ui.ftl` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Uz,
    Ru,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code `{0}` (expected one of UZ, RU, EN)")]
pub struct ParseLanguageError(pub String);

impl Language {
    pub const ALL: [Language; 3] = [Language::Uz, Language::Ru, Language::En];

    /// Short code shown in the language picker.
    pub fn code(self) -> &'static str {
        match self {
            Language::Uz => "UZ",
            Language::Ru => "RU",
            Language::En => "EN",
        }
    }

    /// Folder under `i18n/` holding this language's messages.
    pub fn locale_dir(self) -> &'static str {
        match self {
            Language::Uz => "uz-UZ",
            Language::Ru => "ru-RU",
            Language::En => "en-US",
        }
    }

    pub fn identifier(self) -> LanguageIdentifier {
        match self {
            Language::Uz => unic_langid::langid!("uz-UZ"),
            Language::Ru => unic_langid::langid!("ru-RU"),
            Language::En => unic_langid::langid!("en-US"),
        }
    }

    /// Value for the `lang` attribute of the page root.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "uz" | "uz-uz" => Ok(Language::Uz),
            "ru" | "ru-ru" => Ok(Language::Ru),
            "en" | "en-us" => Ok(Language::En),
            _ => Err(ParseLanguageError(raw.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

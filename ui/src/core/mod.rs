//! Platform-agnostic state and persistence shared by every view.

pub mod language;
pub mod prefs;
pub mod storage;
pub mod theme;

pub use language::{Language, ParseLanguageError};
pub use prefs::PreferenceStore;
pub use storage::{default_storage, PreferenceStorage, StorageError, StorageHandle};
pub use theme::{ParseThemeError, Theme};

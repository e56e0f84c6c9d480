//! End-to-end behaviour of the preference store and the resolver together,
//! without a renderer.

use ui::core::prefs::THEME_STORAGE_KEY;
use ui::core::{Language, PreferenceStore, StorageHandle, Theme};
use ui::i18n::TranslationTable;

#[test]
fn first_visit_then_switch_language() {
    let table = TranslationTable::embedded();
    let storage = StorageHandle::memory();
    let mut store = PreferenceStore::open(storage.clone());

    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(store.language(), Language::Uz);
    assert_eq!(table.resolve(store.language(), "nav_home"), "Bosh sahifa");

    store.set_language(Language::En);
    assert_eq!(table.resolve(store.language(), "nav_home"), "Home");

    // Nothing else moved.
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(storage.get(THEME_STORAGE_KEY), None);
}

#[test]
fn theme_round_trips_across_sessions() {
    let storage = StorageHandle::memory();

    for theme in [Theme::Light, Theme::Dark, Theme::Light] {
        let mut session = PreferenceStore::open(storage.clone());
        session.set_theme(theme);
        assert_eq!(PreferenceStore::open(storage.clone()).theme(), theme);
    }
}

#[test]
fn language_resets_on_a_new_session() {
    let storage = StorageHandle::memory();
    for lang in Language::ALL {
        let mut session = PreferenceStore::open(storage.clone());
        session.set_language(lang);
        session.set_theme(Theme::Light);

        let next = PreferenceStore::open(storage.clone());
        assert_eq!(next.language(), Language::Uz);
        assert_eq!(next.theme(), Theme::Light);
    }
}

#[test]
fn corrupted_storage_falls_back_to_dark() {
    for junk in ["", "LIGHT", "blue", "{\"theme\":\"light\"}"] {
        let storage = StorageHandle::memory();
        storage.set(THEME_STORAGE_KEY, junk).unwrap();
        assert_eq!(PreferenceStore::open(storage).theme(), Theme::Dark, "{junk:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn theme_survives_a_restart_on_disk() {
    use ui::core::storage::{FileStorage, PREFERENCES_FILE};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(PREFERENCES_FILE);

    let mut first = PreferenceStore::open(StorageHandle::new(FileStorage::at(&path)));
    first.set_theme(Theme::Light);
    drop(first);

    let second = PreferenceStore::open(StorageHandle::new(FileStorage::at(&path)));
    assert_eq!(second.theme(), Theme::Light);
}

#[test]
fn missing_keys_degrade_to_the_key() {
    let table = TranslationTable::embedded();
    let store = PreferenceStore::open(StorageHandle::memory());
    let key = "pricing_banner";
    assert_eq!(table.resolve(store.language(), key), key);
    assert_eq!(table.resolve(store.language(), key), key);
}

//! Local persistence helpers for user preferences.
//!
//! Backends:
//! - wasm32: browser `localStorage` (`LocalStorage`)
//! - native: a small JSON object in the platform config dir (`FileStorage`)
//! - anywhere: an in-process map (`MemoryStorage`), used by tests and as the
//!   fallback when neither of the above can be opened.
//!
//! Values are plain strings keyed by plain strings. Callers own the encoding
//! of their values (see `PreferenceStore` for the `theme` key).

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;
use tracing::warn;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, io};

/// Name of the preferences file inside the native config directory.
#[cfg(not(target_arch = "wasm32"))]
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no storage backend available: {0}")]
    Unavailable(String),
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode preferences: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("browser storage rejected the operation: {0}")]
    Browser(String),
}

/// Key/value persistence used by the preference store.
///
/// Reads never fail: an unreadable backend behaves like an empty one.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
///
/// Equality is identity, so the handle can travel as a component prop.
#[derive(Clone)]
pub struct StorageHandle(Rc<dyn PreferenceStorage>);

impl StorageHandle {
    pub fn new(backend: impl PreferenceStorage + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub fn memory() -> Self {
        Self::new(MemoryStorage::default())
    }
}

impl Deref for StorageHandle {
    type Target = dyn PreferenceStorage;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for StorageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StorageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StorageHandle(..)")
    }
}

/// In-process storage. Lives as long as the handle that owns it.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let inner = window
            .local_storage()
            .map_err(|err| StorageError::Browser(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|err| StorageError::Browser(format!("{err:?}")))
    }
}

/// JSON object file, re-read on every access and rewritten on every `set`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.json` inside the per-user config directory.
    pub fn in_config_dir() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("uz", "Kraken Tech", "kraken-site")
            .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
        Ok(Self::at(dirs.config_dir().join(PREFERENCES_FILE)))
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(
                    target: "storage",
                    "ignoring unreadable preferences file {}: {err}",
                    self.path.display()
                );
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(
                    target: "storage",
                    "failed to read preferences file {}: {err}",
                    self.path.display()
                );
                BTreeMap::new()
            }
        }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let encoded = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, encoded).map_err(|err| self.io_error(err))
    }
}

/// Storage for the current platform, or an in-memory map when it cannot be
/// opened (preferences then only last for the session).
pub fn default_storage() -> StorageHandle {
    #[cfg(target_arch = "wasm32")]
    let backend = LocalStorage::open().map(StorageHandle::new);
    #[cfg(not(target_arch = "wasm32"))]
    let backend = FileStorage::in_config_dir().map(StorageHandle::new);

    backend.unwrap_or_else(|err| {
        warn!(target: "storage", "{err}; preferences will not outlive this session");
        StorageHandle::memory()
    })
}

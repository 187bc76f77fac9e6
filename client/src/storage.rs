//! Browser key-value storage behind a swappable trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard persists two keys: the `user` session marker and the
//! `patients` collection. Pages reach storage through the [`SharedStore`]
//! context value so the same code runs against `localStorage` in the browser
//! and against [`MemoryStore`] during SSR and tests.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is synchronous and best-effort. Reads of a missing key are
//! not errors; malformed JSON is reported as [`StorageError::Parse`] and left
//! for the caller to surface.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the current-user session marker.
pub const USER_KEY: &str = "user";
/// Storage key for the persisted patient collection.
pub const PATIENTS_KEY: &str = "patients";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read storage: {0}")]
    Read(String),
    #[error("failed to write storage: {0}")]
    Write(String),
    #[error("malformed value under '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value store, shaped after the Web Storage API.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Store handle shared through Leptos context.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Parse`] if the stored text is not valid JSON for
/// `T`, or any error raised by the store itself.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Parse { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding fails or the store rejects the write.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Process-local store used for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing JSON encoding.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage`, looked up on every call so the handle stays
/// `Send + Sync`. Requires a browser environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// The store the running app should use: `localStorage` in the browser, an
/// empty in-memory store everywhere else.
#[must_use]
pub fn default_store() -> SharedStore {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(LocalStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStore::new())
    }
}

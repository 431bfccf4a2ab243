//! Client-side key/value preference storage with JSON encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules never talk to `localStorage` directly. They hold a
//! [`PersistedCell`] over a boxed [`PreferenceStore`], so the browser backing
//! and the in-memory test backing satisfy the same contract.
//!
//! TRADE-OFFS
//! ==========
//! Reads are forgiving: a missing, unreadable, or malformed record reads as
//! `None`. Writes report failures so callers can decide how loudly to log.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// String key/value storage that survives page reloads.
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value for `key`, `None` when never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`.
///
/// Looked up on every call so the handle stays `Send + Sync` for Leptos
/// context. Outside the `csr` feature every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local storage used by tests and non-browser builds.
///
/// Clones share the same entries, so a test can keep one handle for
/// inspection while the state under test owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw record, bypassing JSON encoding.
    #[must_use]
    pub fn with_entry(self, key: &str, raw: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), raw.to_owned());
        }
        self
    }

    /// Raw record currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().map_or(None, |entries| entries.get(key).cloned())
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Read {
            key: key.to_owned(),
            reason: "memory store poisoned".to_owned(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Write {
            key: key.to_owned(),
            reason: "memory store poisoned".to_owned(),
        })?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A single JSON-encoded value stored under a fixed key.
pub struct PersistedCell<T> {
    key: String,
    store: Box<dyn PreferenceStore>,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> PersistedCell<T> {
    pub fn new(key: impl Into<String>, store: Box<dyn PreferenceStore>) -> Self {
        Self { key: key.into(), store, _value: PhantomData }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Decode the stored value.
    ///
    /// Absent, unreadable, and malformed records all read as `None`.
    pub fn get(&self) -> Option<T> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("preference `{}` unreadable, using default: {e}", self.key);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed preference `{}` ({raw:?}): {e}", self.key);
                None
            }
        }
    }

    /// Encode and store `value`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if encoding fails or the backend rejects the
    /// write.
    pub fn set(&self, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set_item(&self.key, &raw)
    }
}

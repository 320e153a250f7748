//! Key-value persistence behind the trackers.
//!
//! The browser's `localStorage` is the real backing store. Everything else in
//! the crate talks to the [`KeyValueStore`] trait so tracker logic can be
//! exercised against [`MemoryStore`] off the browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("stored value under {key} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|storage| BrowserStore { storage })
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Page-lifetime store. Used when `localStorage` is blocked, and in tests.
#[derive(Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cells.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.cells.borrow_mut().remove(key);
        Ok(())
    }
}

thread_local! {
    static FALLBACK: Rc<MemoryStore> = Rc::new(MemoryStore::new());
    static FALLBACK_ANNOUNCED: Cell<bool> = Cell::new(false);
}

/// `true` only the first time it is called on this thread.
fn first_fallback() -> bool {
    FALLBACK_ANNOUNCED.with(|announced| !announced.replace(true))
}

/// Opens `localStorage`, or the shared in-memory fallback when the browser
/// refuses access (private mode, disabled storage).
pub fn open_store() -> Rc<dyn KeyValueStore> {
    match BrowserStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            if first_fallback() {
                warn!("{}, tracker data will not survive a reload", e);
            }
            FALLBACK.with(|store| store.clone() as Rc<dyn KeyValueStore>)
        }
    }
}

/// Reads and decodes `key`. `Ok(None)` when nothing is stored.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            }),
    }
}

/// Like [`read_json`] but never fails: absent, unreadable and corrupt values
/// all come back as `T::default()`.
pub fn load_json_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match read_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!("{}, starting from defaults", e);
            T::default()
        }
    }
}

pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct Cell {
        count: u32,
    }

    #[test]
    fn test_save_then_read() {
        let store = MemoryStore::new();
        save_json(&store, "cell", &Cell { count: 3 }).unwrap();
        let cell: Option<Cell> = read_json(&store, "cell").unwrap();
        assert_eq!(cell, Some(Cell { count: 3 }));
    }

    #[test]
    fn test_absent_key_reads_none() {
        let store = MemoryStore::new();
        let cell: Option<Cell> = read_json(&store, "missing").unwrap();
        assert!(cell.is_none());
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let store = MemoryStore::new();
        store.set("cell", "{not json").unwrap();
        let err = read_json::<Cell>(&store, "cell").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == "cell"));
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set("cell", "[1, 2").unwrap();
        let cell: Cell = load_json_or_default(&store, "cell");
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn test_fallback_is_announced_once() {
        assert!(first_fallback());
        assert!(!first_fallback());
        assert!(!first_fallback());
    }

    #[test]
    fn test_remove_clears_key() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}

//! Key-Value Storage
//!
//! Thin abstraction over browser session/local storage so auth and
//! developer settings can be exercised against an in-memory store.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("{0} storage is not available")]
    Unavailable(&'static str),
    #[error("storage operation on '{key}' failed: {message}")]
    Operation { key: String, message: String },
}

/// String key-value store with the semantics of the Web Storage API
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Which browser storage area to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// Cleared when the browsing session ends
    Session,
    /// Survives across sessions
    Local,
}

impl StorageArea {
    fn name(&self) -> &'static str {
        match self {
            StorageArea::Session => "session",
            StorageArea::Local => "local",
        }
    }
}

/// `window.sessionStorage` / `window.localStorage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub const fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    pub const fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let unavailable = StorageError::Unavailable(self.area.name());
        let window = web_sys::window().ok_or_else(|| unavailable.clone())?;
        let storage = match self.area {
            StorageArea::Session => window.session_storage(),
            StorageArea::Local => window.local_storage(),
        };
        storage.ok().flatten().ok_or(unavailable)
    }
}

fn op_error(key: &str, err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Operation {
        key: key.to_string(),
        message: format!("{:?}", err),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| op_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|e| op_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(|e| op_error(key, e))
    }
}

/// In-memory store used by tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        // Removing a missing key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_store_through_reference() {
        fn write<S: KeyValueStore>(store: S) {
            store.set("a", "1").unwrap();
        }

        let store = MemoryStorage::new();
        write(&store);
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }
}

use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("no persistent storage backend is available")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Durable key-value storage for small client-side preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call so a blocked or missing
/// backend (private mode, no window) surfaces as `StorageError::Unavailable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// Process-local storage standing in for `localStorage`.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_item(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage
                .items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }
    }

    impl PreferenceStore for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Backend that refuses every operation.
    pub(crate) struct UnavailableStorage;

    impl PreferenceStore for UnavailableStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn memory_storage_overwrites_values() {
        let storage = MemoryStorage::with_item("k", "old");
        storage.set("k", "new").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn storage_error_messages() {
        assert_eq!(
            StorageError::Operation("QuotaExceededError".into()).to_string(),
            "storage operation failed: QuotaExceededError"
        );
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "no persistent storage backend is available"
        );
    }
}

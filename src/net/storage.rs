//! Key-value storage backing the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` only sees the `SessionStore` trait. The browser build uses
//! `localStorage`; SSR and tests use the in-memory store.
//!
//! TRADE-OFFS
//! ==========
//! Storage is per browser profile with no cross-tab coordination. Reads that
//! fail (storage disabled, private mode) behave like missing keys.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ClientError;

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `ClientError::Storage` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    fn remove(&self, key: &str);
}

/// Shared in-memory store. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::LocalStorageStore;

#[cfg(feature = "hydrate")]
mod browser {
    use super::SessionStore;
    use crate::error::ClientError;

    /// `window.localStorage`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorageStore;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    impl SessionStore for LocalStorageStore {
        fn get(&self, key: &str) -> Option<String> {
            storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
            let storage = storage().ok_or_else(|| ClientError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|_| ClientError::Storage(format!("failed to write `{key}` to localStorage")))
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

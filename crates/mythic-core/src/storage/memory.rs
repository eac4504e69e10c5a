//! In-process key-value store.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::KeyValueStore;
use crate::error::StorageError;

/// Map-backed store. Writes can be switched off to simulate a failing
/// device store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set_item`/`remove_item` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            Err(StorageError::QueryFailed("writes disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        store.set_item("a", "1").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
        store.remove_item("a").unwrap();
        assert!(store.get_item("a").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn failing_writes_leave_data_alone() {
        let store = MemoryStore::new();
        store.set_item("a", "1").unwrap();
        store.fail_writes(true);
        assert!(store.set_item("a", "2").is_err());
        assert!(store.remove_item("a").is_err());
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
    }
}

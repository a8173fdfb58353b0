//! Key/value snapshot storage behind the registry.

use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to encode registry: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A string key/value store such as `window.localStorage`.
pub trait SnapshotStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// In-memory store. Clones share the same map, so a clone handed to a second
/// registry behaves like the same browser profile after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<FnvHashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.set(key, value);
        Ok(())
    }
}

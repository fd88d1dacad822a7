use super::{KeyValueStore, StorageError};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Process-local store for ephemeral sessions and tests
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, e.g. to simulate data left by an earlier run
    pub fn with_entry(self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.entries.lock().insert(key.to_string(), value.into());
        self
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ports::store::{SnapshotStore, StoreError};

/// In-memory store for testing purposes.
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

use std::sync::Mutex;

use redis::Commands;

use crate::domain::ports::store::{SnapshotStore, StoreError};

/// Redis-backed key-value store; the deployment default.
pub struct RedisStore {
    conn: Mutex<redis::Connection>,
}

impl RedisStore {
    /// Connect to the Redis server at `url` (e.g. `redis://127.0.0.1:6379/0`).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the URL is invalid or the server
    /// cannot be reached.
    pub fn connect(url: &str) -> Result<Self, StoreError> {
        let client = open_client(url)?;
        let conn = client
            .get_connection()
            .map_err(|e| StoreError::Unavailable(format!("{url}: {e}")))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn open_client(url: &str) -> Result<redis::Client, StoreError> {
    redis::Client::open(url).map_err(|e| StoreError::Unavailable(format!("{url}: {e}")))
}

impl SnapshotStore for RedisStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;
        let value: Option<Vec<u8>> = conn
            .get(key)
            .map_err(|e| StoreError::ReadFailed(format!("GET {key}: {e}")))?;
        drop(conn);
        Ok(value)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        conn.set::<_, _, ()>(key, value)
            .map_err(|e| StoreError::WriteFailed(format!("SET {key}: {e}")))?;
        drop(conn);
        Ok(())
    }
}

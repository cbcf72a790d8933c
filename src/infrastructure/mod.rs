pub mod notifications;
pub mod persistence;
pub mod sources;

#[cfg(test)]
pub mod test_server;

use crate::application::config::{StoreBackend, StoreConfig};
use crate::domain::ports::store::{SnapshotStore, StoreError};

use self::persistence::redis_store::RedisStore;
use self::persistence::sqlite_store::SqliteStore;

/// Open the configured key-value backend.
///
/// # Errors
///
/// Returns `StoreError::Unavailable` if the backend cannot be reached or opened.
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn SnapshotStore>, StoreError> {
    match config.backend {
        StoreBackend::Redis => {
            tracing::debug!("Using Redis store at {}", config.redis_url);
            Ok(Box::new(RedisStore::connect(&config.redis_url)?))
        }
        StoreBackend::Sqlite => {
            tracing::debug!("Using SQLite store at {}", config.sqlite_path);
            Ok(Box::new(SqliteStore::new(&config.sqlite_path)?))
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Byte-oriented key-value storage shared by the fetch cycle and the rotation job.
pub trait SnapshotStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

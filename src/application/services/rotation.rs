use crate::domain::ports::store::{SnapshotStore, StoreError};
use crate::domain::value_objects::StoreKey;

/// Result of a day rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationResult {
    /// Number of bytes copied into "yesterday" (0 when "current" was absent).
    pub bytes_copied: usize,
    pub current_present: bool,
}

/// Copy the stored "current" value into the "yesterday" slot, byte for byte.
///
/// An absent "current" writes an empty value, which later reads back as an
/// empty day baseline.
///
/// # Errors
///
/// Returns `StoreError` if the read or the write fails.
pub fn rotate_day(store: &dyn SnapshotStore) -> Result<RotationResult, StoreError> {
    let current = store.get(StoreKey::Current.as_str())?;
    let current_present = current.is_some();
    let value = current.unwrap_or_default();

    store.set(StoreKey::Yesterday.as_str(), &value)?;

    if current_present {
        tracing::info!("Rotated {} into {}", StoreKey::Current, StoreKey::Yesterday);
    } else {
        tracing::warn!("{} is absent, {} cleared", StoreKey::Current, StoreKey::Yesterday);
    }

    Ok(RotationResult {
        bytes_copied: value.len(),
        current_present,
    })
}

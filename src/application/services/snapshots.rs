use crate::domain::entities::snapshot::MetricSnapshot;
use crate::domain::ports::store::{SnapshotStore, StoreError};
use crate::domain::value_objects::metric;
use crate::domain::value_objects::StoreKey;

/// Decode a stored snapshot. Anything but a JSON object of counts yields `None`.
#[must_use]
pub fn decode_snapshot(raw: &[u8]) -> Option<MetricSnapshot> {
    serde_json::from_slice(raw).ok()
}

/// Encode a snapshot in its stored form.
///
/// # Errors
///
/// Returns `StoreError::WriteFailed` if serialization fails.
pub fn encode_snapshot(snapshot: &MetricSnapshot) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(snapshot).map_err(|e| StoreError::WriteFailed(e.to_string()))
}

/// Read the snapshot under `key`, substituting an empty one when the value is
/// absent or cannot be decoded.
///
/// # Errors
///
/// Returns `StoreError` only if the store itself fails.
pub fn load_or_empty(store: &dyn SnapshotStore, key: StoreKey) -> Result<MetricSnapshot, StoreError> {
    Ok(store
        .get(key.as_str())?
        .map_or_else(MetricSnapshot::empty, |raw| decode_or_empty(&raw, key)))
}

/// Baseline for "updated" deltas: the stored "current" snapshot.
///
/// When "current" has never been written, the raw integer keys of older
/// deployments seed the baseline instead.
///
/// # Errors
///
/// Returns `StoreError` if the store fails.
pub fn load_baseline(store: &dyn SnapshotStore) -> Result<MetricSnapshot, StoreError> {
    match store.get(StoreKey::Current.as_str())? {
        Some(raw) => Ok(decode_or_empty(&raw, StoreKey::Current)),
        None => load_legacy(store),
    }
}

/// Baseline for "today" deltas: the stored "yesterday" snapshot.
///
/// # Errors
///
/// Returns `StoreError` if the store fails.
pub fn load_day_baseline(store: &dyn SnapshotStore) -> Result<MetricSnapshot, StoreError> {
    load_or_empty(store, StoreKey::Yesterday)
}

/// Overwrite the stored "current" snapshot.
///
/// # Errors
///
/// Returns `StoreError` if encoding or the write fails.
pub fn save_current(store: &dyn SnapshotStore, snapshot: &MetricSnapshot) -> Result<(), StoreError> {
    store.set(StoreKey::Current.as_str(), &encode_snapshot(snapshot)?)
}

fn decode_or_empty(raw: &[u8], key: StoreKey) -> MetricSnapshot {
    decode_snapshot(raw).unwrap_or_else(|| {
        tracing::warn!("Unreadable snapshot under {key}, using an empty baseline");
        MetricSnapshot::empty()
    })
}

fn load_legacy(store: &dyn SnapshotStore) -> Result<MetricSnapshot, StoreError> {
    let mut seeded = Vec::new();
    for (key, name) in [
        (StoreKey::LegacyTotal, metric::INFECTED),
        (StoreKey::LegacyStockholm, metric::STOCKHOLM),
    ] {
        if let Some(count) = store.get(key.as_str())?.as_deref().and_then(parse_raw_count) {
            seeded.push((name, count));
        }
    }
    if !seeded.is_empty() {
        tracing::info!("Seeding baseline from {} legacy key(s)", seeded.len());
    }
    Ok(seeded.into_iter().collect())
}

fn parse_raw_count(raw: &[u8]) -> Option<u64> {
    std::str::from_utf8(raw).ok()?.trim().parse().ok()
}

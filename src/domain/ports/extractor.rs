use thiserror::Error;

use crate::domain::entities::snapshot::MetricSnapshot;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("source content is not valid {format}: {reason}")]
    Malformed { format: &'static str, reason: String },
    #[error("expected field missing from source: {0}")]
    MissingField(String),
    #[error("field {field} is not a non-negative integer: {value}")]
    NotNumeric { field: String, value: String },
}

pub trait SnapshotExtractor: Send + Sync {
    /// Parse raw source content into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError` if the content does not have the
    /// expected structure or a value cannot be read as a count.
    fn extract(&self, raw: &str) -> Result<MetricSnapshot, ExtractionError>;
}

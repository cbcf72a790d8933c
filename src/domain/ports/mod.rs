pub mod extractor;
pub mod fetcher;
pub mod notifier;
pub mod store;

pub use extractor::{ExtractionError, SnapshotExtractor};
pub use fetcher::{FetchError, SourceFetcher};
pub use notifier::{NotificationError, Notifier};
pub use store::{SnapshotStore, StoreError};

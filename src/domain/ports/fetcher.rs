use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("source request failed: {0}")]
    Transport(String),
    #[error("source answered HTTP {status}: {url}")]
    Status { status: u16, url: String },
}

#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Retrieve the raw body published at `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request cannot be sent or the
    /// endpoint answers with a non-success status.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::delta::DiffReport;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("failed to send notification: {0}")]
    SendFailed(String),
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a summary of what changed to the main channel.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the message could not be sent.
    /// A delivered message rejected by the receiving end is logged, not returned.
    async fn notify_update(&self, report: &DiffReport) -> Result<(), NotificationError>;

    /// Report a failed run to the error channel.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the message could not be sent.
    async fn notify_failure(&self, message: &str) -> Result<(), NotificationError>;
}

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::warn;

use super::message;
use crate::application::config::SlackConfig;
use crate::domain::entities::delta::DiffReport;
use crate::domain::ports::notifier::{NotificationError, Notifier};
use crate::domain::value_objects::message_style::MessageStyle;

/// Posts updates to a Slack incoming webhook.
///
/// Updates go to the main channel, run failures to the error channel.
/// A non-2xx answer is logged and otherwise ignored; a transport failure is
/// returned to the caller.
pub struct SlackNotifier {
    url: String,
    channel: String,
    error_channel: String,
    username: String,
    icon_emoji: String,
    style: MessageStyle,
    client: reqwest::Client,
}

impl SlackNotifier {
    /// Creates a notifier posting to `url` with the identity and channels in `config`.
    ///
    /// The HTTP client gives up after 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::ChannelUnavailable` if the HTTP client
    /// cannot be initialized (e.g. TLS backend failure).
    pub fn new(url: String, config: &SlackConfig) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                NotificationError::ChannelUnavailable(format!("cannot build HTTP client: {e}"))
            })?;

        Ok(Self {
            url,
            channel: config.channel.clone(),
            error_channel: config.error_channel.clone(),
            username: config.username.clone(),
            icon_emoji: config.icon_emoji.clone(),
            style: config.style,
            client,
        })
    }

    fn update_payload(&self, report: &DiffReport) -> Value {
        match self.style {
            MessageStyle::Text => json!({
                "username": &self.username,
                "channel": &self.channel,
                "icon_emoji": &self.icon_emoji,
                "text": message::render_text(report)
            }),
            MessageStyle::Fields => json!({
                "username": &self.username,
                "channel": &self.channel,
                "icon_emoji": &self.icon_emoji,
                "attachments": [{
                    "fields": message::render_fields(report)
                }]
            }),
        }
    }

    fn failure_payload(&self, message: &str) -> Value {
        json!({
            "username": &self.username,
            "channel": &self.error_channel,
            "icon_emoji": &self.icon_emoji,
            "text": format!("Uppdateringen misslyckades: {message}")
        })
    }

    async fn send_payload(&self, payload: &Value) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Slack webhook answered HTTP {status}: {body}");
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify_update(&self, report: &DiffReport) -> Result<(), NotificationError> {
        let payload = self.update_payload(report);
        self.send_payload(&payload).await
    }

    async fn notify_failure(&self, message: &str) -> Result<(), NotificationError> {
        let payload = self.failure_payload(message);
        self.send_payload(&payload).await
    }
}

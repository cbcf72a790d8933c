pub mod message;
pub mod terminal;
pub mod webhook;

use crate::application::config::SlackConfig;
use crate::domain::ports::notifier::{NotificationError, Notifier};

use self::terminal::TerminalNotifier;
use self::webhook::SlackNotifier;

/// Slack when a webhook URL is configured, the terminal otherwise.
///
/// # Errors
///
/// Returns an error if the Slack HTTP client cannot be built.
pub fn create_notifier(config: &SlackConfig) -> Result<Box<dyn Notifier>, NotificationError> {
    match &config.webhook_url {
        Some(url) => {
            tracing::debug!("Posting updates to Slack channel {}", config.channel);
            Ok(Box::new(SlackNotifier::new(url.clone(), config)?))
        }
        None => {
            tracing::info!("No Slack webhook configured, printing updates to the terminal");
            Ok(Box::new(TerminalNotifier::new()))
        }
    }
}

use tracing_subscriber::EnvFilter;

use crate::domain::ports::notifier::Notifier;

/// Log filter from `RUST_LOG`, `info` when unset or invalid.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Tell the error channel that a run failed. Never fails itself.
pub async fn report_failure(notifier: &dyn Notifier, error: &anyhow::Error) {
    tracing::error!("{error:#}");
    if let Err(e) = notifier.notify_failure(&format!("{error:#}")).await {
        tracing::warn!("Could not report failure: {e}");
    }
}

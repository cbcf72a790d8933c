use anyhow::Context;

use super::snapshots::{load_baseline, load_day_baseline, save_current};
use crate::domain::diff::{DiffEngine, DiffInput};
use crate::domain::ports::extractor::SnapshotExtractor;
use crate::domain::ports::fetcher::SourceFetcher;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::store::SnapshotStore;

/// Result of a single fetch/notify cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateCycleResult {
    pub notified: bool,
    pub persisted: bool,
    pub changed_metrics: usize,
}

/// Orchestrates one cycle: fetch → extract → diff → notify → persist.
pub struct UpdateService<'a> {
    fetcher: &'a dyn SourceFetcher,
    extractor: &'a dyn SnapshotExtractor,
    store: &'a dyn SnapshotStore,
    notifier: &'a dyn Notifier,
    engine: &'a DiffEngine,
    source_url: &'a str,
}

impl<'a> UpdateService<'a> {
    #[must_use]
    pub fn new(
        fetcher: &'a dyn SourceFetcher,
        extractor: &'a dyn SnapshotExtractor,
        store: &'a dyn SnapshotStore,
        notifier: &'a dyn Notifier,
        engine: &'a DiffEngine,
        source_url: &'a str,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            store,
            notifier,
            engine,
            source_url,
        }
    }

    /// Run a single cycle. `force` notifies even when nothing changed.
    ///
    /// An unchanged source is a successful no-op: nothing is sent and nothing
    /// is written. Once the decision to notify is made, "current" is written
    /// whatever happens to the delivery.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching, extraction or the store fails, or if the
    /// update could not be sent (after "current" has been written).
    pub async fn run_once(&self, force: bool) -> anyhow::Result<UpdateCycleResult> {
        let raw = self
            .fetcher
            .fetch(self.source_url)
            .await
            .context("Failed to fetch statistics")?;
        let latest = self
            .extractor
            .extract(&raw)
            .context("Failed to extract statistics")?;
        tracing::debug!("Extracted {} metric(s)", latest.len());

        let baseline = load_baseline(self.store).context("Failed to read current snapshot")?;
        let day_baseline =
            load_day_baseline(self.store).context("Failed to read yesterday snapshot")?;

        let report = self.engine.diff(&DiffInput {
            latest: &latest,
            baseline: &baseline,
            day_baseline: &day_baseline,
            force,
        });

        if !report.should_notify {
            tracing::info!("No change since last update");
            return Ok(UpdateCycleResult {
                notified: false,
                persisted: false,
                changed_metrics: 0,
            });
        }

        tracing::info!(
            "{} metric(s) changed{}",
            report.changed_count(),
            if report.forced { " (forced)" } else { "" }
        );

        let delivery = self.notifier.notify_update(&report).await;

        let persisted = DiffEngine::persisted_snapshot(&latest, &baseline);
        save_current(self.store, &persisted).context("Failed to write current snapshot")?;

        delivery.context("Failed to send update notification")?;

        Ok(UpdateCycleResult {
            notified: true,
            persisted: true,
            changed_metrics: report.changed_count(),
        })
    }
}

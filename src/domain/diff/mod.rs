use std::collections::BTreeSet;

use crate::domain::entities::delta::{DiffReport, MetricDelta};
use crate::domain::entities::snapshot::MetricSnapshot;
use crate::domain::value_objects::metric;

/// Everything one diff needs. `force` is fixed for the lifetime of the input.
#[derive(Debug, Clone, Copy)]
pub struct DiffInput<'a> {
    pub latest: &'a MetricSnapshot,
    pub baseline: &'a MetricSnapshot,
    pub day_baseline: &'a MetricSnapshot,
    pub force: bool,
}

/// Compares a fresh snapshot with the stored baselines and decides whether to notify.
///
/// Pure: no I/O, no clock. A zero reading is "not yet reported" when the metric
/// is regional or had a stored count: it keeps that count and never triggers a
/// notification on its own.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    regional_metrics: BTreeSet<String>,
}

impl DiffEngine {
    #[must_use]
    pub fn new<I, S>(regional_metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regional_metrics: regional_metrics.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_regional(&self, metric: &str) -> bool {
        self.regional_metrics.contains(metric)
    }

    /// Compute per-metric deltas for every metric in `latest`.
    #[must_use]
    pub fn diff(&self, input: &DiffInput<'_>) -> DiffReport {
        let mut deltas: Vec<MetricDelta> = input
            .latest
            .metrics()
            .map(|(name, value)| {
                let previous = input.baseline.get(name);
                MetricDelta {
                    metric: name.to_string(),
                    value,
                    updated: signed_delta(value, previous),
                    today: signed_delta(value, input.day_baseline.get(name)),
                    pending: value == 0 && (previous != 0 || self.is_regional(name)),
                }
            })
            .collect();
        deltas.sort_by(|a, b| metric::display_order(&a.metric, &b.metric));

        // Pending readings keep their stored count, so they never count as news.
        let changed = deltas.iter().any(|d| !d.is_unchanged());

        DiffReport {
            deltas,
            should_notify: input.force || changed,
            forced: input.force,
        }
    }

    /// Snapshot to store as the new "current": zero readings keep the previous
    /// baseline value so a transient extraction gap does not wipe a count.
    #[must_use]
    pub fn persisted_snapshot(latest: &MetricSnapshot, baseline: &MetricSnapshot) -> MetricSnapshot {
        latest
            .metrics()
            .map(|(name, value)| {
                let kept = if value == 0 { baseline.get(name) } else { value };
                (name, kept)
            })
            .collect()
    }
}

fn signed_delta(new: u64, old: u64) -> i64 {
    if new >= old {
        i64::try_from(new - old).unwrap_or(i64::MAX)
    } else {
        i64::try_from(old - new).map_or(i64::MIN, |d| -d)
    }
}

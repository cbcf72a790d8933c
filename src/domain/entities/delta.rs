use serde::{Deserialize, Serialize};

/// Change of one metric relative to the stored baselines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub metric: String,
    /// Freshly observed count.
    pub value: u64,
    /// Change since the previous stored "current" snapshot.
    pub updated: i64,
    /// Change since the stored "yesterday" snapshot.
    pub today: i64,
    /// Zero reading taken as "not reported yet"; the stored count is kept.
    #[serde(default)]
    pub pending: bool,
}

impl MetricDelta {
    /// A pending reading never moves the stored count, so it is no change either.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.pending || self.updated == 0
    }
}

/// Outcome of comparing a fresh snapshot with the stored baselines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub deltas: Vec<MetricDelta>,
    pub should_notify: bool,
    pub forced: bool,
}

impl DiffReport {
    #[must_use]
    pub fn delta(&self, metric: &str) -> Option<&MetricDelta> {
        self.deltas.iter().find(|d| d.metric == metric)
    }

    /// Number of metrics whose count moved since the previous run.
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.deltas.iter().filter(|d| !d.is_unchanged()).count()
    }
}

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Observed counters at one point in time, keyed by metric name.
///
/// Missing metrics read as zero, so two snapshots compare equal when every
/// metric in the union of their keys has the same count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSnapshot {
    counts: BTreeMap<String, u64>,
}

impl MetricSnapshot {
    #[must_use]
    pub const fn new(counts: BTreeMap<String, u64>) -> Self {
        Self { counts }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count for `metric`, or 0 when the metric was never observed.
    #[must_use]
    pub fn get(&self, metric: &str) -> u64 {
        self.counts.get(metric).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, metric: &str) -> bool {
        self.counts.contains_key(metric)
    }

    /// Metrics in name order.
    pub fn metrics(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    #[must_use]
    pub fn metric_names_union<'a>(&'a self, other: &'a Self) -> BTreeSet<&'a str> {
        self.counts
            .keys()
            .chain(other.counts.keys())
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl PartialEq for MetricSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.metric_names_union(other)
            .into_iter()
            .all(|metric| self.get(metric) == other.get(metric))
    }
}

impl Eq for MetricSnapshot {}

impl<K: Into<String>> FromIterator<(K, u64)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

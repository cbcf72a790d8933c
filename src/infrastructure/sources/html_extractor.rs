use regex::Regex;

use super::parse_count;
use crate::application::config::HtmlSourceConfig;
use crate::domain::entities::snapshot::MetricSnapshot;
use crate::domain::ports::extractor::{ExtractionError, SnapshotExtractor};

/// Reads counts out of a statistics web page with one regex per metric.
///
/// Each pattern must have exactly one capture group around the number.
#[derive(Debug)]
pub struct HtmlExtractor {
    patterns: Vec<(String, Regex)>,
}

impl HtmlExtractor {
    /// Compile the configured patterns.
    ///
    /// # Errors
    ///
    /// Returns an error naming the metric whose pattern does not compile or
    /// does not have exactly one capture group.
    pub fn new(config: &HtmlSourceConfig) -> anyhow::Result<Self> {
        let mut patterns = Vec::with_capacity(config.patterns.len());
        for (metric, pattern) in &config.patterns {
            let regex = Regex::new(pattern)
                .map_err(|e| anyhow::anyhow!("invalid pattern for {metric}: {e}"))?;
            // captures_len counts the implicit whole-match group
            if regex.captures_len() != 2 {
                anyhow::bail!("pattern for {metric} must have exactly one capture group");
            }
            patterns.push((metric.clone(), regex));
        }
        Ok(Self { patterns })
    }
}

impl SnapshotExtractor for HtmlExtractor {
    fn extract(&self, raw: &str) -> Result<MetricSnapshot, ExtractionError> {
        let mut counts = Vec::with_capacity(self.patterns.len());
        for (metric, regex) in &self.patterns {
            let captured = regex
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .ok_or_else(|| ExtractionError::MissingField(metric.clone()))?;
            counts.push((metric.clone(), parse_count(metric, captured.as_str())?));
        }
        Ok(counts.into_iter().collect())
    }
}

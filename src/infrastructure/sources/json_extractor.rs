use serde_json::Value;

use super::parse_count;
use crate::application::config::{JsonSourceConfig, RegionLookupConfig};
use crate::domain::entities::snapshot::MetricSnapshot;
use crate::domain::ports::extractor::{ExtractionError, SnapshotExtractor};

/// Reads counts from a JSON API response.
///
/// Top-level metrics are addressed by JSON pointer. Regional metrics are found
/// by scanning a list of area objects for a matching code, e.g.
/// `{"total": 150, "data": [{"kod": "01", "antal": 42}]}`.
pub struct JsonExtractor {
    fields: Vec<(String, String)>,
    regions: Vec<RegionLookupConfig>,
}

impl JsonExtractor {
    #[must_use]
    pub fn new(config: &JsonSourceConfig) -> Self {
        Self {
            fields: config
                .fields
                .iter()
                .map(|(metric, pointer)| (metric.clone(), pointer.clone()))
                .collect(),
            regions: config.regions.clone(),
        }
    }

    fn lookup_region(document: &Value, region: &RegionLookupConfig) -> Result<u64, ExtractionError> {
        let areas = document
            .pointer(&region.list)
            .and_then(Value::as_array)
            .ok_or_else(|| ExtractionError::MissingField(region.list.clone()))?;

        let area = areas
            .iter()
            .find(|area| area.get(&region.code_field).is_some_and(|c| code_matches(c, &region.code)))
            .ok_or_else(|| {
                ExtractionError::MissingField(format!(
                    "{}[{}={}]",
                    region.list, region.code_field, region.code
                ))
            })?;

        let count = area.get(&region.count_field).ok_or_else(|| {
            ExtractionError::MissingField(format!(
                "{}[{}={}].{}",
                region.list, region.code_field, region.code, region.count_field
            ))
        })?;
        coerce_count(&region.metric, count)
    }
}

impl SnapshotExtractor for JsonExtractor {
    fn extract(&self, raw: &str) -> Result<MetricSnapshot, ExtractionError> {
        let document: Value = serde_json::from_str(raw).map_err(|e| ExtractionError::Malformed {
            format: "JSON",
            reason: e.to_string(),
        })?;

        let mut counts = Vec::with_capacity(self.fields.len() + self.regions.len());
        for (metric, pointer) in &self.fields {
            let value = document
                .pointer(pointer)
                .ok_or_else(|| ExtractionError::MissingField(pointer.clone()))?;
            counts.push((metric.clone(), coerce_count(metric, value)?));
        }
        for region in &self.regions {
            counts.push((region.metric.clone(), Self::lookup_region(&document, region)?));
        }
        Ok(counts.into_iter().collect())
    }
}

fn code_matches(value: &Value, code: &str) -> bool {
    match value {
        Value::String(s) => s.trim() == code,
        Value::Number(n) => n.to_string() == code,
        _ => false,
    }
}

fn coerce_count(metric: &str, value: &Value) -> Result<u64, ExtractionError> {
    match value {
        Value::Number(n) => n.as_u64().ok_or_else(|| ExtractionError::NotNumeric {
            field: metric.to_string(),
            value: n.to_string(),
        }),
        Value::String(s) => parse_count(metric, s),
        other => Err(ExtractionError::NotNumeric {
            field: metric.to_string(),
            value: other.to_string(),
        }),
    }
}

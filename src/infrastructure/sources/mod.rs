pub mod html_extractor;
pub mod http_fetcher;
pub mod json_extractor;

use crate::application::config::{SourceConfig, SourceFormat};
use crate::domain::ports::extractor::{ExtractionError, SnapshotExtractor};

use self::html_extractor::HtmlExtractor;
use self::json_extractor::JsonExtractor;

/// Create the extractor matching the configured source format.
///
/// # Errors
///
/// Returns an error if an HTML pattern is invalid.
pub fn create_extractor(config: &SourceConfig) -> anyhow::Result<Box<dyn SnapshotExtractor>> {
    match config.format {
        SourceFormat::Json => Ok(Box::new(JsonExtractor::new(&config.json))),
        SourceFormat::Html => Ok(Box::new(HtmlExtractor::new(&config.html)?)),
    }
}

/// Parse a published count, ignoring thousands separators
/// (spaces, no-break spaces, `&#160;` / `&nbsp;` entities).
pub(crate) fn parse_count(metric: &str, text: &str) -> Result<u64, ExtractionError> {
    let digits: String = text
        .replace("&#160;", "")
        .replace("&nbsp;", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    digits.parse().map_err(|_| ExtractionError::NotNumeric {
        field: metric.to_string(),
        value: text.trim().to_string(),
    })
}

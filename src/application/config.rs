use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::metric;
use crate::domain::value_objects::MessageStyle;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CORONABOT_CONFIG";

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
}

/// Shape of the published statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    #[default]
    Json,
    Html,
}

/// Where the statistics are published and how to read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub format: SourceFormat,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub json: JsonSourceConfig,
    #[serde(default)]
    pub html: HtmlSourceConfig,
}

/// Metric name → JSON pointer, plus per-region lookups in a list of areas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSourceConfig {
    #[serde(default = "default_json_fields")]
    pub fields: BTreeMap<String, String>,
    #[serde(default = "default_regions")]
    pub regions: Vec<RegionLookupConfig>,
}

/// Finds one area entry by code and reads its count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionLookupConfig {
    pub metric: String,
    pub code: String,
    #[serde(default = "default_region_list")]
    pub list: String,
    #[serde(default = "default_code_field")]
    pub code_field: String,
    #[serde(default = "default_count_field")]
    pub count_field: String,
}

/// Metric name → regex with exactly one capture group around the count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HtmlSourceConfig {
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

/// Slack incoming webhook. Without a URL, updates are printed to the terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default = "default_error_channel")]
    pub error_channel: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_icon_emoji")]
    pub icon_emoji: String,
    #[serde(default)]
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Redis,
    Sqlite,
}

/// Key-value store holding the "current" and "yesterday" snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,
}

/// Metrics whose zero value means "not reported yet".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    #[serde(default = "default_regional_metrics")]
    pub regional_metrics: Vec<String>,
}

// --- Defaults ---

const fn default_timeout() -> u64 {
    30
}

fn default_json_fields() -> BTreeMap<String, String> {
    BTreeMap::from([(metric::INFECTED.to_string(), "/total".to_string())])
}

fn default_regions() -> Vec<RegionLookupConfig> {
    vec![RegionLookupConfig {
        metric: metric::STOCKHOLM.into(),
        code: "01".into(),
        list: default_region_list(),
        code_field: default_code_field(),
        count_field: default_count_field(),
    }]
}

fn default_region_list() -> String {
    "/data".into()
}

fn default_code_field() -> String {
    "kod".into()
}

fn default_count_field() -> String {
    "antal".into()
}

fn default_channel() -> String {
    "#corona".into()
}

fn default_error_channel() -> String {
    "#corona-errors".into()
}

fn default_username() -> String {
    "New and Improved CoronaBot".into()
}

fn default_icon_emoji() -> String {
    ":biohazard_sign:".into()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379/0".into()
}

// NOTE: Stored with tilde; SqliteStore expands it with shellexpand.
fn default_sqlite_path() -> String {
    "~/.local/share/coronabot/coronabot.db".into()
}

fn default_regional_metrics() -> Vec<String> {
    vec![metric::STOCKHOLM.into()]
}

// --- Default impls ---

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            format: SourceFormat::default(),
            timeout_secs: default_timeout(),
            json: JsonSourceConfig::default(),
            html: HtmlSourceConfig::default(),
        }
    }
}

impl Default for JsonSourceConfig {
    fn default() -> Self {
        Self {
            fields: default_json_fields(),
            regions: default_regions(),
        }
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            channel: default_channel(),
            error_channel: default_error_channel(),
            username: default_username(),
            icon_emoji: default_icon_emoji(),
            style: MessageStyle::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            redis_url: default_redis_url(),
            sqlite_path: default_sqlite_path(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            regional_metrics: default_regional_metrics(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from `$CORONABOT_CONFIG`, or from the default path,
    /// creating a default file there if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::config_path()?,
        };
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Check the settings the fetch cycle cannot run without.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or inconsistent setting.
    pub fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            bail!("source.url must be set to the statistics endpoint");
        }
        match self.source.format {
            SourceFormat::Json if self.source.json.fields.is_empty() && self.source.json.regions.is_empty() => {
                bail!("source.json must define at least one field or region");
            }
            SourceFormat::Html if self.source.html.patterns.is_empty() => {
                bail!("source.html.patterns must define at least one metric");
            }
            _ => {}
        }
        if let Some(url) = &self.slack.webhook_url {
            if url.trim().is_empty() {
                bail!("slack.webhook_url is empty; remove it to print to the terminal");
            }
        }
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("coronabot").join("config.toml"))
    }
}

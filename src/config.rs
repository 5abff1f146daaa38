use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Public SF mobile food facility permit dataset
pub const DEFAULT_DATASET_URL: &str = "https://data.sfgov.org/resource/rqzj-sfat.json";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Sent as `$limit`; the endpoint returns 1000 rows when unset
    pub row_limit: Option<u32>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            url: default_dataset_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            row_limit: None,
        }
    }
}

fn default_dataset_url() -> String { DEFAULT_DATASET_URL.to_string() }
fn default_timeout_secs() -> u64 { 15 }
fn default_max_retries() -> u32 { 3 }
fn default_retry_backoff_ms() -> u64 { 500 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with FOODTRUCK__)
    /// 4. `SF_FOOD_URL` for the dataset URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., FOODTRUCK__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        with_dataset_url_override(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        with_dataset_url_override(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("FOODTRUCK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply `SF_FOOD_URL` on top of every other source
fn with_dataset_url_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("SF_FOOD_URL") {
        Ok(url) if !url.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("dataset.url", url)?
            .build(),
        _ => Ok(settings),
    }
}

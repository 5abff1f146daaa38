use crate::config::DatasetSettings;
use crate::models::{FoodTruck, Snapshot};
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Dataset endpoint returned {0}")]
    HttpStatus(StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl DatasetError {
    /// Transport failures and server errors are worth another attempt
    fn is_retryable(&self) -> bool {
        match self {
            DatasetError::RequestError(e) => !e.is_decode() && !e.is_builder(),
            DatasetError::HttpStatus(status) => status.is_server_error(),
            DatasetError::InvalidResponse(_) => false,
        }
    }
}

/// Client for the remote permit dataset
///
/// Fetches every row once at startup and turns it into a [`Snapshot`].
pub struct DatasetClient {
    url: String,
    row_limit: Option<u32>,
    max_retries: u32,
    retry_backoff: Duration,
    client: Client,
}

impl DatasetClient {
    /// Create a new dataset client
    pub fn new(settings: &DatasetSettings) -> Result<Self, DatasetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            url: settings.url.clone(),
            row_limit: settings.row_limit,
            max_retries: settings.max_retries,
            retry_backoff: Duration::from_millis(settings.retry_backoff_ms),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw rows, retrying transient failures with exponential backoff
    pub async fn fetch_rows(&self) -> Result<Vec<Map<String, Value>>, DatasetError> {
        let mut attempt = 0;

        loop {
            match self.fetch_once().await {
                Ok(rows) => return Ok(rows),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let delay = self.retry_backoff * 2u32.saturating_pow(attempt);
                    attempt += 1;
                    tracing::warn!(
                        "Dataset fetch attempt {} failed ({}), retrying in {:?}",
                        attempt,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self) -> Result<Vec<Map<String, Value>>, DatasetError> {
        tracing::debug!("Fetching dataset from: {}", self.url);

        let mut request = self.client.get(&self.url);
        if let Some(limit) = self.row_limit {
            request = request.query(&[("$limit", limit)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(DatasetError::HttpStatus(response.status()));
        }

        let json: Value = response.json().await?;

        let rows = match json {
            Value::Array(rows) => rows,
            other => {
                return Err(DatasetError::InvalidResponse(format!(
                    "expected a JSON array of rows, got {}",
                    json_kind(&other)
                )))
            }
        };

        let total = rows.len();
        let objects: Vec<Map<String, Value>> = rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();

        if objects.len() < total {
            tracing::warn!("Skipped {} dataset rows that were not JSON objects", total - objects.len());
        }

        Ok(objects)
    }

    /// Fetch and build the records, or fail with the underlying error
    pub async fn fetch_trucks(&self) -> Result<Vec<FoodTruck>, DatasetError> {
        let rows = self.fetch_rows().await?;
        Ok(rows.iter().map(FoodTruck::from_row).collect())
    }

    /// Load the startup snapshot
    ///
    /// Never fails: errors are logged and an empty snapshot is returned.
    pub async fn load_snapshot(&self) -> Snapshot {
        match self.fetch_trucks().await {
            Ok(trucks) => {
                tracing::info!("Loaded {} food trucks from {}", trucks.len(), self.url);
                Snapshot::new(trucks, self.url.clone())
            }
            Err(e) => {
                tracing::error!("Could not load food truck data from {}: {}", self.url, e);
                Snapshot::empty()
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

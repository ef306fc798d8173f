//! Departures feed HTTP client.
//!
//! One outbound GET per stop, with a bounded timeout. No retries, no
//! backoff, no caching between invocations.

use crate::config::StopId;

use super::error::ZtmError;
use super::types::DeparturesResponse;

/// Default base URL for the departures feed.
const DEFAULT_BASE_URL: &str = "https://ckan2.multimediagdansk.pl";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the departures client.
#[derive(Debug, Clone)]
pub struct ZtmConfig {
    /// Base URL for the feed (defaults to the production endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ZtmConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ZtmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Departures feed client.
#[derive(Debug, Clone)]
pub struct ZtmClient {
    http: reqwest::Client,
    base_url: String,
}

impl ZtmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ZtmConfig) -> Result<Self, ZtmError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the current departures for one stop.
    ///
    /// Errors are typed rather than swallowed here; the aggregation
    /// layer decides that every failure renders as an empty board.
    pub async fn departures(&self, stop: StopId) -> Result<DeparturesResponse, ZtmError> {
        let url = format!("{}/departures", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("stopId", stop.to_string())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ZtmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ZtmError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

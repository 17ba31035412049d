//! TfL Journey API HTTP client.
//!
//! Async client for the journey planner endpoint. Handles credentials,
//! bounded request concurrency, and normalization of responses into
//! domain journeys.
//!
//! Credentials are explicit configuration: the client never reads the
//! process environment.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Journey;

use super::convert::normalize_itinerary;
use super::error::TflError;
use super::types::ItineraryResult;

/// Default base URL for the TfL unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the journey client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application id for API authentication
    pub app_id: String,
    /// Application key for API authentication
    pub app_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config with the given credentials.
    ///
    /// Empty credentials are allowed; the API serves anonymous requests
    /// at a reduced rate.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TfL journey planner client.
///
/// Provides methods for planning journeys between two locations. Uses a
/// semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct JourneyClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
    semaphore: Arc<Semaphore>,
}

impl JourneyClient {
    /// Create a new journey client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            app_id: config.app_id,
            app_key: config.app_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Plan journeys between two locations.
    ///
    /// `from` and `to` are free-form locations the service resolves
    /// itself: postcodes, stop ids, or `lat,long` pairs. Returns the
    /// normalized journeys, best candidate first.
    ///
    /// # Errors
    ///
    /// Transport and API failures surface as their own variants; a
    /// well-formed HTTP response that cannot be normalized fails with
    /// `TflError::Normalize`.
    pub async fn get_journeys(&self, from: &str, to: &str) -> Result<Vec<Journey>, TflError> {
        let raw = self.get_journeys_raw(from, to).await?;
        Ok(normalize_itinerary(&raw)?)
    }

    /// Fetch the raw itinerary response (for debugging/testing).
    pub async fn get_journeys_raw(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ItineraryResult, TflError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TflError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/Journey/JourneyResults/{}/to/{}", self.base_url, from, to);

        debug!(from, to, "requesting journeys");

        let mut request = self.http.get(&url);
        if !self.app_id.is_empty() || !self.app_key.is_empty() {
            request = request.query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
            ]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TflError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TflError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

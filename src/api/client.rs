//! HTTP client for the monitoring backend.
//!
//! Talks to the REST API exposed by the monitoring server, typically on
//! port 5000:
//!
//! - `GET /api/thresholds`: current threshold configuration
//! - `POST /api/thresholds`: upsert one parameter's threshold
//! - `GET /api/device/status`: sensor device health
//!
//! ## Example
//!
//! ```rust,no_run
//! use aquawatch::api::{HttpApi, MonitorApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpApi::builder()
//!         .endpoint("http://localhost:5000")
//!         .build();
//!
//!     for record in api.fetch_thresholds().await? {
//!         println!("{}: {} - {}", record.parameter, record.min_value, record.max_value);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::data::{DeviceStatus, Threshold, ThresholdRecord};

use super::{ApiError, MonitorApi};

/// Client for the monitoring server's REST API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    endpoint: String,
}

impl HttpApi {
    /// Create a new builder for configuring the client.
    pub fn builder() -> HttpApiBuilder {
        HttpApiBuilder::default()
    }

    /// The configured base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }
}

#[async_trait]
impl MonitorApi for HttpApi {
    async fn fetch_thresholds(&self) -> Result<Vec<ThresholdRecord>, ApiError> {
        let response = self.client.get(self.url("/api/thresholds")).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let records: Vec<ThresholdRecord> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(records)
    }

    async fn save_threshold(&self, threshold: &Threshold) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/thresholds"))
            .json(threshold)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden(
                "role is not allowed to change thresholds".to_string(),
            ));
        }

        if !response.status().is_success() {
            return Err(ApiError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn fetch_device_status(&self) -> Result<DeviceStatus, ApiError> {
        let response = self
            .client
            .get(self.url("/api/device/status"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let status: DeviceStatus = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(status)
    }
}

/// Builder for [`HttpApi`].
#[derive(Debug, Default)]
pub struct HttpApiBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl HttpApiBuilder {
    /// Set the backend base URL (e.g. "http://localhost:5000").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> HttpApi {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        let mut endpoint = self
            .endpoint
            .unwrap_or_else(|| "http://localhost:5000".to_string());
        // A trailing slash would produce "//api/..." paths
        while endpoint.ends_with('/') {
            endpoint.pop();
        }

        HttpApi { client, endpoint }
    }
}

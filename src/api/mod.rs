//! Remote API abstraction.
//!
//! The monitoring backend is reached through the [`MonitorApi`] trait so the
//! sync controller and device poller can be exercised against an in-memory
//! implementation in tests; [`HttpApi`] is the real reqwest-backed client.

mod client;
mod error;

pub use client::{HttpApi, HttpApiBuilder};
pub use error::ApiError;

use async_trait::async_trait;

use crate::data::{DeviceStatus, Threshold, ThresholdRecord};

/// Operations the monitoring backend offers to this client.
#[async_trait]
pub trait MonitorApi: Send + Sync {
    /// Fetch the full set of configured thresholds.
    async fn fetch_thresholds(&self) -> Result<Vec<ThresholdRecord>, ApiError>;

    /// Upsert the threshold for one parameter. Success is judged by HTTP
    /// status alone.
    async fn save_threshold(&self, threshold: &Threshold) -> Result<(), ApiError>;

    /// Fetch the sensor device's current status.
    async fn fetch_device_status(&self) -> Result<DeviceStatus, ApiError>;
}

//! Background device-status polling.
//!
//! The device panel refreshes on a fixed interval independently of anything
//! the user is doing in the forms. A background tokio task fetches
//! `GET /api/device/status` and pushes results over a channel; the UI thread
//! polls that channel non-blockingly each loop iteration.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::MonitorApi;
use crate::data::DeviceStatus;

/// Source of periodic device-status updates.
///
/// Fetch errors don't stop the poller: the error is recorded for display and
/// the next interval tries again.
#[derive(Debug)]
pub struct StatusSource {
    receiver: mpsc::Receiver<DeviceStatus>,
    last_error: Arc<Mutex<Option<String>>>,
}

impl StatusSource {
    /// Spawn the polling task on the given runtime.
    ///
    /// The first fetch happens immediately so the device panel populates
    /// without waiting a full interval.
    pub fn spawn(
        api: Arc<dyn MonitorApi>,
        interval: Duration,
        handle: &tokio::runtime::Handle,
    ) -> Self {
        let (tx, rx) = mpsc::channel(16);
        let last_error = Arc::new(Mutex::new(None));
        let error_handle = last_error.clone();

        handle.spawn(async move {
            loop {
                match api.fetch_device_status().await {
                    Ok(status) => {
                        *error_handle.lock().unwrap() = None;
                        if tx.send(status).await.is_err() {
                            // Receiver dropped, UI is gone
                            break;
                        }
                    }
                    Err(e) => {
                        *error_handle.lock().unwrap() = Some(e.to_string());
                    }
                }

                tokio::time::sleep(interval).await;
            }
        });

        Self {
            receiver: rx,
            last_error,
        }
    }

    /// Take the latest status update, if one arrived. Non-blocking.
    pub fn poll(&mut self) -> Option<DeviceStatus> {
        // Drain to the newest update; intermediate ones are stale
        let mut latest = None;
        while let Ok(status) = self.receiver.try_recv() {
            latest = Some(status);
        }
        latest
    }

    /// The most recent fetch error, if the last poll attempt failed.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::data::{Threshold, ThresholdRecord};
    use async_trait::async_trait;

    struct FixedApi {
        fail: bool,
    }

    #[async_trait]
    impl MonitorApi for FixedApi {
        async fn fetch_thresholds(&self) -> Result<Vec<ThresholdRecord>, ApiError> {
            Ok(Vec::new())
        }

        async fn save_threshold(&self, _threshold: &Threshold) -> Result<(), ApiError> {
            Ok(())
        }

        async fn fetch_device_status(&self) -> Result<DeviceStatus, ApiError> {
            if self.fail {
                Err(ApiError::Connection("refused".to_string()))
            } else {
                Ok(DeviceStatus {
                    device_name: Some("ESP32-IPAL-01".to_string()),
                    status: "online".to_string(),
                    signal_strength: Some(72),
                    last_seen: None,
                })
            }
        }
    }

    #[tokio::test]
    async fn test_poll_delivers_status() {
        let api: Arc<dyn MonitorApi> = Arc::new(FixedApi { fail: false });
        let mut source =
            StatusSource::spawn(api, Duration::from_secs(60), &tokio::runtime::Handle::current());

        // Give the background task time for the immediate first fetch
        tokio::time::sleep(Duration::from_millis(50)).await;

        let status = source.poll().expect("status should have arrived");
        assert!(status.is_online());
        assert!(source.last_error().is_none());

        // Nothing new before the next interval
        assert!(source.poll().is_none());
    }

    #[tokio::test]
    async fn test_fetch_error_is_recorded() {
        let api: Arc<dyn MonitorApi> = Arc::new(FixedApi { fail: true });
        let mut source =
            StatusSource::spawn(api, Duration::from_secs(60), &tokio::runtime::Handle::current());

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(source.poll().is_none());
        let err = source.last_error().expect("error should be recorded");
        assert!(err.contains("Connection failed"));
    }
}

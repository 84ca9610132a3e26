//! Device status as reported by `GET /api/device/status`.

use serde::{Deserialize, Serialize};

/// Fallback name when the server doesn't report one.
pub const DEFAULT_DEVICE_NAME: &str = "ESP32-IPAL-01";

/// Status payload for the sensor device.
///
/// Every field except `status` is optional on the wire; the display layer
/// substitutes placeholders for missing values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStatus {
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub signal_strength: Option<i64>,
    #[serde(default)]
    pub last_seen: Option<String>,
}

impl DeviceStatus {
    /// Anything other than the literal "online" counts as offline.
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }

    pub fn name(&self) -> &str {
        self.device_name.as_deref().unwrap_or(DEFAULT_DEVICE_NAME)
    }

    /// Signal strength formatted as a percentage, "-" if unreported.
    pub fn signal(&self) -> String {
        match self.signal_strength {
            Some(s) => format!("{}%", s),
            None => "-".to_string(),
        }
    }

    pub fn last_seen_display(&self) -> &str {
        self.last_seen.as_deref().unwrap_or("just now")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_detection() {
        let status: DeviceStatus = serde_json::from_str(
            r#"{"device_name":"ESP32-IPAL-01","status":"online","signal_strength":87,"last_seen":"2026-08-30T10:00:00"}"#,
        )
        .unwrap();
        assert!(status.is_online());
        assert_eq!(status.signal(), "87%");
        assert_eq!(status.last_seen_display(), "2026-08-30T10:00:00");
    }

    #[test]
    fn test_minimal_payload_is_offline() {
        // The server sends only {"status": "offline", "device_name": ...} when
        // it has never heard from the device.
        let status: DeviceStatus =
            serde_json::from_str(r#"{"status":"offline","device_name":"ESP32-IPAL-01"}"#).unwrap();
        assert!(!status.is_online());
        assert_eq!(status.signal(), "-");
        assert_eq!(status.last_seen_display(), "just now");
    }

    #[test]
    fn test_unknown_status_string_is_offline() {
        let status: DeviceStatus = serde_json::from_str(r#"{"status":"rebooting"}"#).unwrap();
        assert!(!status.is_online());
        assert_eq!(status.name(), DEFAULT_DEVICE_NAME);
    }
}

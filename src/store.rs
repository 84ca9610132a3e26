//! Local notification-preference store.
//!
//! A small file-backed string key-value map. Preferences are read once at
//! startup and written wholesale on save. There is no schema versioning;
//! unknown keys are preserved across saves so other tools can park their
//! own state in the same file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::NotificationForm;

const KEY_EMAIL_ENABLED: &str = "emailNotif";
const KEY_EMAIL_ADDRESS: &str = "notifEmail";
const KEY_WHATSAPP_ENABLED: &str = "whatsappNotif";
const KEY_WHATSAPP_NUMBER: &str = "whatsappNumber";

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    path: PathBuf,
}

impl NotificationStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults for anything absent.
    ///
    /// Booleans are string-encoded: email is enabled unless the stored value
    /// is exactly "false", WhatsApp is enabled only if it is exactly "true".
    /// A missing or unreadable file simply yields the defaults.
    pub fn load(&self) -> NotificationForm {
        let map = self.read_map();

        NotificationForm {
            email_enabled: map.get(KEY_EMAIL_ENABLED).map(String::as_str) != Some("false"),
            email_address: map.get(KEY_EMAIL_ADDRESS).cloned().unwrap_or_default(),
            whatsapp_enabled: map.get(KEY_WHATSAPP_ENABLED).map(String::as_str) == Some("true"),
            whatsapp_number: map.get(KEY_WHATSAPP_NUMBER).cloned().unwrap_or_default(),
        }
    }

    /// Write all four preference keys, keeping any unrelated keys already in
    /// the file.
    pub fn save(&self, form: &NotificationForm) -> Result<()> {
        let mut map = self.read_map();

        map.insert(KEY_EMAIL_ENABLED.to_string(), form.email_enabled.to_string());
        map.insert(KEY_EMAIL_ADDRESS.to_string(), form.email_address.clone());
        map.insert(
            KEY_WHATSAPP_ENABLED.to_string(),
            form.whatsapp_enabled.to_string(),
        );
        map.insert(
            KEY_WHATSAPP_NUMBER.to_string(),
            form.whatsapp_number.clone(),
        );

        let json = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

//! Client configuration.
//!
//! Settings layer an optional TOML file under environment variables
//! (`AQUAWATCH_*`); command-line flags override both in `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Resolved client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the monitoring backend.
    pub server: String,
    /// Device-status refresh interval in seconds.
    pub refresh_secs: u64,
    /// Path to the notification-preference store file.
    pub store_path: PathBuf,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: "http://localhost:5000".to_string(),
            refresh_secs: 30,
            store_path: PathBuf::from("aquawatch-prefs.json"),
            timeout_secs: 10,
        }
    }
}

impl Settings {
    /// Load settings from an explicit file, or from `aquawatch.toml` in the
    /// working directory if present, merged with `AQUAWATCH_*` environment
    /// variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();

        let mut builder = Config::builder()
            .set_default("server", defaults.server)?
            .set_default("refresh_secs", defaults.refresh_secs as i64)?
            .set_default(
                "store_path",
                defaults.store_path.to_string_lossy().to_string(),
            )?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?;

        builder = match path {
            Some(p) => builder.add_source(File::from(p)),
            None => builder.add_source(File::with_name("aquawatch").required(false)),
        };

        let config = builder
            .add_source(Environment::with_prefix("AQUAWATCH"))
            .build()
            .context("Failed to load settings")?;

        config.try_deserialize().context("Invalid settings")
    }
}

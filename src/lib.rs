// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # aquawatch
//!
//! A terminal client for configuring and monitoring an ESP32-based water
//! quality monitoring station.
//!
//! The station tracks pH, temperature, and TDS (total dissolved solids) and
//! exposes an HTTP API for sensor thresholds and device status. This crate
//! provides an interactive TUI for editing those thresholds, managing local
//! notification preferences, and watching the device's connection state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (forms)  │    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐    ┌─────────┐    ┌─────────┐                 │
//! │  │  sync   │───▶│   api   │    │  store  │                 │
//! │  │ (load/  │    │ (HTTP)  │    │ (local  │                 │
//! │  │  save)  │    │         │    │  prefs) │                 │
//! │  └─────────┘    └─────────┘    └─────────┘                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and user interaction logic
//! - **[`api`]**: The [`MonitorApi`] trait and its HTTP implementation
//! - **[`sync`]**: Threshold load/save orchestration against a [`MonitorApi`]
//! - **[`source`]**: Background device-status polling
//! - **[`store`]**: Local JSON persistence for notification preferences
//! - **[`data`]**: Threshold and notification form models with validation
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Connect to the default backend as an operator
//! aquawatch --role operator
//!
//! # Point at a different server and print current state without the TUI
//! aquawatch --server http://192.168.1.50:5000 --check
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use aquawatch::{sync, HttpApi, ThresholdForm};
//!
//! # tokio_test::block_on(async {
//! let api = HttpApi::builder().endpoint("http://localhost:5000").build();
//! let mut form = ThresholdForm::default();
//! sync::load(&mut form, &api).await?;
//! # Ok::<_, aquawatch::ApiError>(())
//! # });
//! ```

pub mod api;
pub mod app;
pub mod data;
pub mod events;
pub mod settings;
pub mod source;
pub mod store;
pub mod sync;
pub mod ui;

// Re-export main types for convenience
pub use api::{ApiError, HttpApi, HttpApiBuilder, MonitorApi};
pub use app::{App, Role, View};
pub use data::{
    DeviceStatus, NotificationForm, Parameter, Threshold, ThresholdForm, ThresholdRecord,
};
pub use settings::Settings;
pub use source::StatusSource;
pub use store::NotificationStore;

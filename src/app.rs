//! Application state and navigation logic.

use std::sync::Arc;
use std::time::Instant;

use crate::api::MonitorApi;
use crate::data::{NotificationForm, ThresholdForm, THRESHOLD_FIELD_COUNT};
use crate::store::NotificationStore;
use crate::sync::{self, SaveError};
use crate::ui::Theme;

/// The role the client was started with.
///
/// Trusted as given: enforcement happens server-side, this only decides which
/// sections are shown and which actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Role {
    Viewer,
    Operator,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Operator => "operator",
            Role::Admin => "admin",
        }
    }
}

/// The current view/tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Threshold min/max form for the three parameters.
    Thresholds,
    /// Notification channel preferences.
    Notifications,
    /// Sensor device status panel.
    Device,
    /// User management (admin only, placeholder data).
    Users,
}

impl View {
    /// Views available for a role. Visibility is a pure function of the role
    /// passed in; there is no mutable visibility state anywhere.
    pub fn available(role: Role) -> &'static [View] {
        match role {
            Role::Admin => &[
                View::Thresholds,
                View::Notifications,
                View::Device,
                View::Users,
            ],
            _ => &[View::Thresholds, View::Notifications, View::Device],
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Thresholds => "Thresholds",
            View::Notifications => "Notifications",
            View::Device => "Device",
            View::Users => "Users",
        }
    }

    /// Number of focusable form fields in this view.
    pub fn field_count(&self) -> usize {
        match self {
            View::Thresholds => THRESHOLD_FIELD_COUNT,
            View::Notifications => 4,
            View::Device | View::Users => 0,
        }
    }
}

/// Severity of a status-bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// A pending action that needs an explicit yes/no from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// Reset threshold fields to factory defaults (local only).
    ResetThresholds,
    /// Admin stub: export the database.
    ExportDatabase,
    /// Admin stub: delete data older than 90 days.
    ClearOldData,
}

impl Confirm {
    pub fn message(&self) -> &'static str {
        match self {
            Confirm::ResetThresholds => "Reset thresholds to factory defaults?",
            Confirm::ExportDatabase => "Export the database to an SQL file?",
            Confirm::ClearOldData => "Delete all data older than 90 days? This cannot be undone.",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub role: Role,
    pub current_view: View,
    pub show_help: bool,
    pub confirm: Option<Confirm>,

    // Form state
    pub thresholds: ThresholdForm,
    pub notifications: NotificationForm,

    // Device panel state, fed by the background poller
    pub device: Option<crate::data::DeviceStatus>,
    pub device_error: Option<String>,

    // Field focus within the current view
    pub focus: usize,
    pub input_active: bool,

    // Threshold load failure, shown until the next successful load
    pub load_error: Option<String>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, MessageKind, Instant)>,

    // Scheduled threshold reload after a successful save
    pub reload_at: Option<Instant>,

    api: Arc<dyn MonitorApi>,
    store: NotificationStore,
    rt: tokio::runtime::Handle,
}

impl App {
    /// Create the app, loading notification preferences from the store.
    pub fn new(
        api: Arc<dyn MonitorApi>,
        store: NotificationStore,
        role: Role,
        rt: tokio::runtime::Handle,
    ) -> Self {
        let notifications = store.load();

        Self {
            running: true,
            role,
            current_view: View::Thresholds,
            show_help: false,
            confirm: None,
            thresholds: ThresholdForm::default(),
            notifications,
            device: None,
            device_error: None,
            focus: 0,
            input_active: false,
            load_error: None,
            theme: Theme::auto_detect(),
            status_message: None,
            reload_at: None,
            api,
            store,
            rt,
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status(&mut self, kind: MessageKind, message: String) {
        self.status_message = Some((message, kind, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (4 seconds).
    pub fn get_status_message(&self) -> Option<(&str, MessageKind)> {
        if let Some((msg, kind, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(4) {
                return Some((msg, *kind));
            }
        }
        None
    }

    /// Whether this role may change thresholds. The server enforces this too;
    /// rejecting early saves a round-trip that would 403.
    pub fn can_edit_thresholds(&self) -> bool {
        self.role != Role::Viewer
    }

    /// Switch to the next available view.
    pub fn next_view(&mut self) {
        let views = View::available(self.role);
        let pos = views.iter().position(|v| *v == self.current_view).unwrap_or(0);
        self.set_view(views[(pos + 1) % views.len()]);
    }

    /// Switch to the previous available view.
    pub fn prev_view(&mut self) {
        let views = View::available(self.role);
        let pos = views.iter().position(|v| *v == self.current_view).unwrap_or(0);
        self.set_view(views[(pos + views.len() - 1) % views.len()]);
    }

    /// Switch to a specific view if it's available for this role.
    pub fn set_view(&mut self, view: View) {
        if View::available(self.role).contains(&view) {
            self.current_view = view;
            self.focus = 0;
            self.input_active = false;
        }
    }

    /// Move field focus down by one.
    pub fn select_next(&mut self) {
        let count = self.current_view.field_count();
        if count > 0 {
            self.focus = (self.focus + 1).min(count - 1);
        }
    }

    /// Move field focus up by one.
    pub fn select_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// The text buffer behind the focused field, if it is a text field.
    pub fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.current_view {
            View::Thresholds => Some(self.thresholds.field_mut(self.focus)),
            View::Notifications => match self.focus {
                1 => Some(&mut self.notifications.email_address),
                3 => Some(&mut self.notifications.whatsapp_number),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether the focused field is a toggle rather than a text field.
    pub fn focused_is_toggle(&self) -> bool {
        self.current_view == View::Notifications && (self.focus == 0 || self.focus == 2)
    }

    /// Start editing the focused text field.
    pub fn begin_edit(&mut self) {
        if self.current_view == View::Thresholds && !self.can_edit_thresholds() {
            self.set_status(
                MessageKind::Error,
                "Viewers cannot change thresholds".to_string(),
            );
            return;
        }
        if self.focused_field_mut().is_some() {
            self.input_active = true;
        }
    }

    /// Stop editing the focused field.
    pub fn end_edit(&mut self) {
        self.input_active = false;
    }

    /// Flip the focused toggle (notification enable flags).
    pub fn toggle_focused(&mut self) {
        if self.current_view != View::Notifications {
            return;
        }
        match self.focus {
            0 => self.notifications.email_enabled = !self.notifications.email_enabled,
            2 => self.notifications.whatsapp_enabled = !self.notifications.whatsapp_enabled,
            _ => {}
        }
    }

    /// Fetch thresholds from the backend and populate the form.
    pub fn load_thresholds(&mut self) {
        let result = self
            .rt
            .block_on(sync::load(&mut self.thresholds, self.api.as_ref()));
        match result {
            Ok(()) => {
                self.load_error = None;
            }
            Err(e) => {
                self.load_error = Some(e.to_string());
                self.set_status(
                    MessageKind::Error,
                    "Failed to load threshold settings".to_string(),
                );
            }
        }
    }

    /// Validate and save the threshold form.
    ///
    /// Runs to completion before control returns to the event loop, so the
    /// three sequential submissions can't interleave with another user
    /// operation.
    pub fn save_thresholds(&mut self) {
        if !self.can_edit_thresholds() {
            self.set_status(
                MessageKind::Error,
                "Viewers cannot change thresholds".to_string(),
            );
            return;
        }

        let result = self
            .rt
            .block_on(sync::save(&self.thresholds, self.api.as_ref()));
        match result {
            Ok(()) => {
                self.set_status(MessageKind::Success, "Threshold settings saved".to_string());
                // Reload shortly after so server-adjusted values show up
                self.reload_at = Some(Instant::now() + sync::RELOAD_DELAY);
            }
            Err(SaveError::Validation(msg)) => {
                self.set_status(MessageKind::Error, msg);
            }
            Err(SaveError::Remote(_)) => {
                self.set_status(
                    MessageKind::Error,
                    "Failed to save threshold settings".to_string(),
                );
            }
        }
    }

    /// Ask for confirmation before resetting the threshold form.
    pub fn request_reset(&mut self) {
        if !self.can_edit_thresholds() {
            self.set_status(
                MessageKind::Error,
                "Viewers cannot change thresholds".to_string(),
            );
            return;
        }
        self.confirm = Some(Confirm::ResetThresholds);
    }

    /// Apply the pending confirmed action.
    pub fn apply_confirm(&mut self) {
        let Some(confirm) = self.confirm.take() else {
            return;
        };
        match confirm {
            Confirm::ResetThresholds => {
                self.thresholds.reset();
                self.set_status(
                    MessageKind::Info,
                    "Thresholds reset to defaults (save to apply)".to_string(),
                );
            }
            Confirm::ExportDatabase => {
                self.set_status(
                    MessageKind::Info,
                    "Database export is not yet available".to_string(),
                );
            }
            Confirm::ClearOldData => {
                self.set_status(
                    MessageKind::Info,
                    "Data cleanup is not yet available".to_string(),
                );
            }
        }
    }

    /// Dismiss the pending confirmation.
    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    /// Validate and persist the notification preferences.
    pub fn save_notifications(&mut self) {
        if let Err(msg) = self.notifications.validate() {
            self.set_status(MessageKind::Error, msg);
            return;
        }
        match self.store.save(&self.notifications) {
            Ok(()) => {
                self.set_status(
                    MessageKind::Success,
                    "Notification settings saved".to_string(),
                );
            }
            Err(e) => {
                self.set_status(
                    MessageKind::Error,
                    format!("Failed to save notification settings: {}", e),
                );
            }
        }
    }

    /// Admin stub: user management isn't implemented yet.
    pub fn user_action_stub(&mut self) {
        self.set_status(
            MessageKind::Info,
            "User management is not yet available".to_string(),
        );
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Run deferred work: the scheduled post-save threshold reload.
    pub fn tick(&mut self) {
        if let Some(at) = self.reload_at {
            if Instant::now() >= at {
                self.reload_at = None;
                self.load_thresholds();
            }
        }
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

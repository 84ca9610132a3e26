use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};

use crate::app::{App, Confirm, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // A pending confirmation captures all input
    if app.confirm.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.apply_confirm(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                app.cancel_confirm();
            }
            _ => {}
        }
        return;
    }

    // If a field is being edited, handle text input
    if app.input_active {
        handle_field_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // View switching
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_view(),

        // Direct view access (Users only exists for admins; set_view ignores
        // views the role can't see)
        KeyCode::Char('1') => app.set_view(View::Thresholds),
        KeyCode::Char('2') => app.set_view(View::Notifications),
        KeyCode::Char('3') => app.set_view(View::Device),
        KeyCode::Char('4') => app.set_view(View::Users),

        // Field navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),

        // Edit or toggle the focused field
        KeyCode::Enter | KeyCode::Char('i') => {
            if app.focused_is_toggle() {
                app.toggle_focused();
            } else {
                app.begin_edit();
            }
        }
        KeyCode::Char(' ') => {
            if app.focused_is_toggle() {
                app.toggle_focused();
            }
        }

        // Save the current view's form
        KeyCode::Char('s') => match app.current_view {
            View::Thresholds => app.save_thresholds(),
            View::Notifications => app.save_notifications(),
            _ => {}
        },

        // Reset thresholds to defaults (asks for confirmation)
        KeyCode::Char('d') => {
            if app.current_view == View::Thresholds {
                app.request_reset();
            }
        }

        // Reload thresholds from the backend
        KeyCode::Char('r') => {
            if app.current_view == View::Thresholds {
                app.load_thresholds();
            }
        }

        // Admin actions (Users view only; all stubs for now)
        KeyCode::Char('a') | KeyCode::Char('e') => {
            if app.current_view == View::Users {
                app.user_action_stub();
            }
        }
        KeyCode::Char('x') => {
            if app.current_view == View::Users {
                app.confirm = Some(Confirm::ExportDatabase);
            }
        }
        KeyCode::Char('c') => {
            if app.current_view == View::Users {
                app.confirm = Some(Confirm::ClearOldData);
            }
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while a field is being edited
fn handle_field_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Done editing; validation happens at save time
        KeyCode::Enter | KeyCode::Esc => app.end_edit(),

        KeyCode::Backspace => {
            if let Some(field) = app.focused_field_mut() {
                field.pop();
            }
        }

        KeyCode::Char(c) => {
            if let Some(field) = app.focused_field_mut() {
                field.push(c);
            }
        }

        KeyCode::Up => {
            app.end_edit();
            app.select_prev();
        }
        KeyCode::Down => {
            app.end_edit();
            app.select_next();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MonitorApi};
    use crate::app::Role;
    use crate::data::{DeviceStatus, Threshold, ThresholdRecord};
    use crate::store::NotificationStore;
    use async_trait::async_trait;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    struct NullApi;

    #[async_trait]
    impl MonitorApi for NullApi {
        async fn fetch_thresholds(&self) -> Result<Vec<ThresholdRecord>, ApiError> {
            Ok(Vec::new())
        }
        async fn save_threshold(&self, _threshold: &Threshold) -> Result<(), ApiError> {
            Ok(())
        }
        async fn fetch_device_status(&self) -> Result<DeviceStatus, ApiError> {
            Err(ApiError::Http("not used".to_string()))
        }
    }

    fn test_app(role: Role) -> (App, tokio::runtime::Runtime, NamedTempFile) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let file = NamedTempFile::new().unwrap();
        let app = App::new(
            Arc::new(NullApi),
            NotificationStore::new(file.path()),
            role,
            rt.handle().clone(),
        );
        (app, rt, file)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let (mut app, _rt, _file) = test_app(Role::Operator);

        press(&mut app, KeyCode::Enter); // begin editing ph_min
        assert!(app.input_active);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Char('.'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter); // done

        assert!(!app.input_active);
        assert_eq!(app.thresholds.ph_min, "6.5");
    }

    #[test]
    fn test_backspace_removes_characters() {
        let (mut app, _rt, _file) = test_app(Role::Operator);
        app.thresholds.ph_min = "68".to_string();

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.thresholds.ph_min, "6");
    }

    #[test]
    fn test_q_quits_in_navigation_but_types_in_edit_mode() {
        let (mut app, _rt, _file) = test_app(Role::Operator);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.thresholds.ph_min, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_confirmation_captures_keys() {
        let (mut app, _rt, _file) = test_app(Role::Operator);
        app.thresholds.ph_min = "7".to_string();

        press(&mut app, KeyCode::Char('d')); // request reset
        assert!(app.confirm.is_some());

        press(&mut app, KeyCode::Char('n'));
        assert!(app.confirm.is_none());
        assert_eq!(app.thresholds.ph_min, "7");

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.thresholds.ph_min, "6");
    }

    #[test]
    fn test_space_toggles_notification_checkbox() {
        let (mut app, _rt, _file) = test_app(Role::Operator);
        app.set_view(View::Notifications);

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.notifications.email_enabled);
    }

    #[test]
    fn test_view_number_keys_respect_role() {
        let (mut app, _rt, _file) = test_app(Role::Viewer);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.current_view, View::Thresholds);

        let (mut admin, _rt2, _file2) = test_app(Role::Admin);
        press(&mut admin, KeyCode::Char('4'));
        assert_eq!(admin.current_view, View::Users);
    }

    #[test]
    fn test_admin_stub_keys_only_fire_in_users_view() {
        let (mut app, _rt, _file) = test_app(Role::Admin);

        // 'x' in the thresholds view does nothing
        press(&mut app, KeyCode::Char('x'));
        assert!(app.confirm.is_none());

        app.set_view(View::Users);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.confirm, Some(Confirm::ExportDatabase));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.confirm, Some(Confirm::ClearOldData));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (mut app, _rt, _file) = test_app(Role::Viewer);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('z'));
        assert!(!app.show_help);
    }
}

//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and the help
//! and confirmation overlays.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

/// Render the header bar with device health at a glance.
///
/// Displays: app name, role, device online indicator, signal strength.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" AQUAWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(app.role.label(), Style::default().fg(app.theme.highlight)),
        Span::raw(" │ "),
    ];

    match (&app.device, &app.device_error) {
        (Some(device), _) => {
            let online = device.is_online();
            spans.push(Span::styled("●", app.theme.online_style(online)));
            spans.push(Span::raw(format!(
                " {} {} │ signal {}",
                device.name(),
                if online { "online" } else { "offline" },
                device.signal(),
            )));
        }
        (None, Some(_)) => {
            spans.push(Span::styled(
                "? device unknown",
                Style::default().fg(app.theme.dim),
            ));
        }
        (None, None) => {
            spans.push(Span::styled(
                "checking device...",
                Style::default().fg(app.theme.dim),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing the views available to this role.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let views = View::available(app.role);

    let titles: Vec<Line> = views
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!(" {}:{} ", i + 1, v.label())))
        .collect();

    let selected = views
        .iter()
        .position(|v| *v == app.current_view)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows temporary feedback messages when present, otherwise the
/// context-sensitive key hints for the current view.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some((msg, kind)) = app.get_status_message() {
        let paragraph = Paragraph::new(format!(" {} ", msg)).style(app.theme.message_style(kind));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(ref err) = app.load_error {
        let paragraph = Paragraph::new(format!(" Error: {} | r:retry q:quit ", err))
            .style(Style::default().fg(app.theme.error));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.input_active {
        "Type to edit | Enter:done Esc:done"
    } else {
        match app.current_view {
            View::Thresholds => "↑↓:field Enter:edit s:save d:reset r:reload Tab:switch ?:help q:quit",
            View::Notifications => "↑↓:field Space:toggle Enter:edit s:save Tab:switch ?:help q:quit",
            View::Device => "Tab:switch ?:help q:quit",
            View::Users => "a:add e:edit x:export c:cleanup Tab:switch ?:help q:quit",
        }
    };

    let paragraph =
        Paragraph::new(format!(" {}", controls)).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  Tab         Next view"),
        Line::from("  ↑/↓ j/k     Move between fields"),
        Line::from("  1-4         Jump to view"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Editing",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Enter/i     Edit focused field"),
        Line::from("  Space       Toggle checkbox"),
        Line::from("  s           Save current form"),
        Line::from("  d           Reset thresholds to defaults"),
        Line::from("  r           Reload thresholds"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Admin (Users view)",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  a/e         Add/edit user"),
        Line::from("  x           Export database"),
        Line::from("  c           Clear data older than 90 days"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 46u16.min(area.width.saturating_sub(4));
    let help_height = 26u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Render the confirmation prompt as a centered modal.
pub fn render_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confirm) = app.confirm else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(format!(" {} ", confirm.message()))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", Style::default().fg(app.theme.ok)),
            Span::raw(":confirm  "),
            Span::styled("n", Style::default().fg(app.theme.error)),
            Span::raw(":cancel "),
        ]),
    ];

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let width = (confirm.message().len() as u16 + 6)
        .max(30)
        .min(area.width.saturating_sub(4));
    let height = 6u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let confirm_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, confirm_area);
    frame.render_widget(Paragraph::new(lines).block(block), confirm_area);
}

//! Notification preference form rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the notification settings form.
///
/// Four focusable rows: two channel toggles, each followed by its
/// destination field.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.notifications;

    let lines = vec![
        Line::from(""),
        toggle_line(app, 0, "Email notifications", form.email_enabled),
        text_line(app, 1, "Recipient email", &form.email_address),
        Line::from(""),
        toggle_line(app, 2, "WhatsApp notifications", form.whatsapp_enabled),
        text_line(app, 3, "WhatsApp number", &form.whatsapp_number),
        Line::from(""),
        Line::from(Span::styled(
            "  Preferences are stored locally on this machine.",
            Style::default().fg(app.theme.dim),
        )),
    ];

    let block = Block::default()
        .title(" Notification Settings [Space:toggle Enter:edit s:save] ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn toggle_line<'a>(app: &App, index: usize, label: &'a str, enabled: bool) -> Line<'a> {
    let marker = if enabled { "[x]" } else { "[ ]" };
    let style = if app.focus == index {
        app.theme.focused
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{} {}", marker, label), style),
    ])
}

fn text_line<'a>(app: &App, index: usize, label: &'a str, value: &str) -> Line<'a> {
    let style = if app.focus == index {
        if app.input_active {
            app.theme.editing
        } else {
            app.theme.focused
        }
    } else {
        Style::default()
    };

    let shown = if app.focus == index && app.input_active {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    Line::from(vec![
        Span::raw(format!("      {}: ", label)),
        Span::styled(shown, style),
    ])
}

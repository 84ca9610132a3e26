//! Device status panel rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the device status panel.
///
/// Refreshed by the background poller; a fetch failure shows the last error
/// in place of live data.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match (&app.device, &app.device_error) {
        (Some(device), _) => {
            let online = device.is_online();
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw("  Device:    "),
                    Span::styled(
                        device.name().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("  Status:    "),
                    Span::styled("● ", app.theme.online_style(online)),
                    Span::styled(
                        if online { "Online" } else { "Offline" },
                        app.theme.online_style(online),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("  Signal:    "),
                    Span::raw(device.signal()),
                ]),
                Line::from(vec![
                    Span::raw("  Last seen: "),
                    Span::raw(device.last_seen_display().to_string()),
                ]),
            ]
        }
        (None, Some(err)) => vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Status: "),
                Span::styled("? Unknown", Style::default().fg(app.theme.dim)),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(err.to_string(), Style::default().fg(app.theme.error)),
            ]),
        ],
        (None, None) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Checking device status...",
                Style::default().fg(app.theme.dim),
            )),
        ],
    };

    let block = Block::default()
        .title(" Device Status (auto-refresh) ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

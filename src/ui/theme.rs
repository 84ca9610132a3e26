//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::app::MessageKind;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for success feedback and an online device.
    pub ok: Color,
    /// Color for errors and an offline device.
    pub error: Color,
    /// Color for dimmed/secondary text.
    pub dim: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows and titles.
    pub header: Style,
    /// Style for the focused form field.
    pub focused: Style,
    /// Style for a field being edited.
    pub editing: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            ok: Color::Green,
            error: Color::Red,
            dim: Color::Gray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            focused: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            editing: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            ok: Color::Green,
            error: Color::Red,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            focused: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            editing: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a status message kind
    pub fn message_style(&self, kind: MessageKind) -> Style {
        match kind {
            MessageKind::Info => Style::default().fg(self.highlight),
            MessageKind::Success => Style::default().fg(self.ok),
            MessageKind::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
        }
    }

    /// Get style for a device online/offline indicator
    pub fn online_style(&self, online: bool) -> Style {
        if online {
            Style::default().fg(self.ok)
        } else {
            Style::default().fg(self.error)
        }
    }
}

//! User management panel (admin only).
//!
//! Account editing is not wired up yet; the panel lists the built-in
//! account and exposes the maintenance actions as confirmation stubs.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" User Management [a:add e:edit x:export c:cleanup] ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 {
        return;
    }

    let header = Row::new(vec![
        Cell::from("Username"),
        Cell::from("Email"),
        Cell::from("Role"),
    ])
    .style(app.theme.header);

    let rows = vec![Row::new(vec![
        Cell::from("admin"),
        Cell::from("admin@rsmatapwt.com"),
        Cell::from("Admin"),
    ])];

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Min(24),
            Constraint::Length(10),
        ],
    )
    .header(header);

    let table_area = Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    };
    frame.render_widget(table, table_area);

    let note_area = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Database export and cleanup run on the server once available.",
            Style::default().fg(app.theme.dim),
        ))),
        note_area,
    );
}

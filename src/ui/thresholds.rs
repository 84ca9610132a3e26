//! Threshold form rendering.
//!
//! Displays the six editable min/max bounds as a table, one row per
//! parameter, with the focused cell highlighted.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::Parameter;

/// Render the threshold settings form.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Parameter"),
        Cell::from("Min"),
        Cell::from("Max"),
        Cell::from("Unit"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = Parameter::ALL
        .iter()
        .enumerate()
        .map(|(row, parameter)| {
            let min_index = row * 2;
            let max_index = min_index + 1;

            Row::new(vec![
                Cell::from(parameter.label()),
                field_cell(app, min_index),
                field_cell(app, max_index),
                Cell::from(parameter.unit()).style(Style::default().fg(app.theme.dim)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Min(6),
    ];

    let title = if app.can_edit_thresholds() {
        " Threshold Settings [s:save d:reset r:reload] "
    } else {
        " Threshold Settings (read-only) "
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

/// A min/max cell, highlighted when focused and cursor-marked when editing.
fn field_cell(app: &App, index: usize) -> Cell<'_> {
    let value = app.thresholds.field(index);

    if app.focus == index {
        if app.input_active {
            Cell::from(Span::styled(format!("{}_", value), app.theme.editing))
        } else {
            Cell::from(Span::styled(format!("{} ", value), app.theme.focused))
        }
    } else {
        Cell::from(value.to_string())
    }
}

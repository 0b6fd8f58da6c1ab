use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::UiSnapshot;

const MAX_COLUMN_WIDTH: usize = 24;

pub(crate) fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &UiSnapshot) {
    let master = &snapshot.master;

    let header = Row::new(
        master
            .columns
            .iter()
            .map(|column| column.title.clone())
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = master
        .cells
        .iter()
        .map(|cells| Row::new(cells.clone()))
        .collect::<Vec<_>>();

    let widths = column_widths(snapshot);
    let border_style = if snapshot.detail_focused {
        Style::default()
    } else {
        Style::default().fg(Color::Cyan)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(snapshot.title.clone())
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");

    let mut state = TableState::default();
    state.select(master.cursor);
    frame.render_stateful_widget(table, area, &mut state);
}

/// Auto-sizes each column to its widest header or cell, capped so one long
/// value cannot starve the rest.
fn column_widths(snapshot: &UiSnapshot) -> Vec<Constraint> {
    let master = &snapshot.master;
    master
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let mut width = column.title.width();
            for cells in &master.cells {
                if let Some(cell) = cells.get(index) {
                    width = width.max(cell.width());
                }
            }
            Constraint::Length(width.min(MAX_COLUMN_WIDTH) as u16 + 1)
        })
        .collect()
}

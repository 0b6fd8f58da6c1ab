use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::UiSnapshot;
use super::components::{editor, footer, master};

/// Composes the whole screen: master list on top, detail editor below,
/// status footer at the bottom.
pub(crate) fn render(frame: &mut Frame<'_>, snapshot: &UiSnapshot) {
    let footer_height = if snapshot.help.is_some() { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(snapshot.master_percent),
            Constraint::Min(4),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    master::render(frame, chunks[0], snapshot);
    editor::render(frame, chunks[1], snapshot);
    footer::render(frame, chunks[2], snapshot);
}

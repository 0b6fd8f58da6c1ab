use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::presentation::UiSnapshot;

pub(crate) fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &UiSnapshot) {
    let Some(help) = &snapshot.help else {
        frame.render_widget(Paragraph::new(snapshot.status.clone()), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    frame.render_widget(Paragraph::new(snapshot.status.clone()), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            help.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[1],
    );
}

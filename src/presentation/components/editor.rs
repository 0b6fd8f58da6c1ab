use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::{DetailBody, DetailLine, UiSnapshot};

pub(crate) fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &UiSnapshot) {
    let items = snapshot
        .detail
        .iter()
        .map(build_field_item)
        .collect::<Vec<_>>();

    let border_style = if snapshot.detail_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(list, area);
}

fn build_field_item(line: &DetailLine) -> ListItem<'static> {
    let prefix = if line.focused { "» " } else { "  " };
    let label_style = if line.focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::raw(prefix.to_string()),
        Span::styled(format!("{}: ", line.label), label_style),
    ];
    let mut lines = Vec::new();

    match &line.body {
        DetailBody::Scalar { value, error } => {
            spans.push(Span::raw(value.clone()));
            lines.push(Line::from(spans));
            if let Some(error) = error {
                lines.push(Line::from(Span::styled(
                    format!("    ✗ {error}"),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        DetailBody::Select { summary } => {
            spans.push(Span::styled(
                summary.clone(),
                Style::default().fg(Color::Yellow),
            ));
            lines.push(Line::from(spans));
        }
        DetailBody::Badges { class, chips } => {
            for chip in chips {
                spans.push(Span::styled(format!(" {chip} "), badge_style(class)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
    }

    ListItem::new(lines)
}

fn badge_style(class: &str) -> Style {
    let color = match class {
        "badge success" => Color::Green,
        "badge error" => Color::Red,
        "badge contrast" => Color::DarkGray,
        _ => Color::Blue,
    };
    Style::default().bg(color).fg(Color::Black)
}

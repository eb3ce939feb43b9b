use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;
use crate::tags::MAX_TAGS;

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let lessons = if state.lessons_loading {
        Span::styled("loading lessons", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            format!("{} lessons", state.lessons.len()),
            Style::default().fg(Color::White),
        )
    };

    let mut spans = vec![
        Span::raw(" "),
        lessons,
        Span::raw("   "),
        Span::styled(
            format!("{}/{} tags", state.draft.tags.len(), MAX_TAGS),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("   "),
        Span::styled("[F1] help", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let widget =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}

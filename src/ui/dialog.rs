use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AlertKind, AppState, Dialog};

pub fn draw_dialog(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(dialog) = state.top_dialog() else {
        return;
    };

    match dialog {
        Dialog::Alert { kind, message, .. } => draw_alert(f, area, *kind, message),
        Dialog::LessonPicker { cursor } => draw_lesson_picker(f, area, state, *cursor),
        Dialog::Help => draw_help(f, area),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn draw_alert(f: &mut Frame, area: Rect, kind: AlertKind, message: &str) {
    let (heading, color) = match kind {
        AlertKind::Notice => ("   Check the form", Color::Yellow),
        AlertKind::Success => ("   ✓  Posted", Color::Green),
        AlertKind::Failure => ("   ✗  Something went wrong", Color::Red),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("   {}", message)),
        Line::from(""),
        Line::from(Span::styled(
            "           [Enter] OK",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(44, lines.len() as u16, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(widget, rect);
}

fn draw_lesson_picker(f: &mut Frame, area: Rect, state: &AppState, cursor: usize) {
    let width = area.width.saturating_sub(8).clamp(30, 72);
    let max_rows = area.height.saturating_sub(6).max(3) as usize;

    let mut rows: Vec<(String, Option<&'static str>)> = vec![("Select a lesson".to_string(), None)];
    for lesson in &state.lessons {
        rows.push((lesson.label(), Some(lesson.status.label())));
    }

    // Keep the cursor row in view.
    let first = cursor.saturating_sub(max_rows.saturating_sub(1));
    let mut lines: Vec<Line> = Vec::new();
    for (i, (label, status)) in rows.iter().enumerate().skip(first).take(max_rows) {
        let selected = i == cursor;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if i == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let mut spans = vec![Span::styled(
            format!("{} {}", if selected { "›" } else { " " }, label),
            style,
        )];
        if let Some(status) = status {
            spans.push(Span::styled(
                format!("  {}", status),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }

    if state.lessons.is_empty() {
        let note = if state.lessons_loading {
            "  Loading lessons..."
        } else {
            "  No confirmed, scheduled or completed lessons."
        };
        lines.push(Line::from(Span::styled(note, Style::default().fg(Color::DarkGray))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter] Choose", Style::default().fg(Color::Green)),
        Span::raw("    "),
        Span::styled("[Esc] Close", Style::default().fg(Color::DarkGray)),
    ]));

    let rect = centered_rect(width, lines.len() as u16 + 2, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Lesson ")
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Key Bindings",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   Tab/S-Tab  Next/previous field"),
        Line::from("   Enter      Open lesson list / add tag"),
        Line::from("   ←/→        Select tag (tags field)"),
        Line::from("   Del        Remove selected tag"),
        Line::from("   Alt+B/I/K  Bold, italic, link"),
        Line::from("   Alt+L/N    Bulleted, numbered list"),
        Line::from("   Alt+G/C    Image, code block"),
        Line::from("   Ctrl+P     Toggle content preview"),
        Line::from("   Ctrl+E     Edit content in $EDITOR"),
        Line::from("   Ctrl+S     Post question"),
        Line::from("   Ctrl+Q     Cancel (back to questions)"),
        Line::from("   Ctrl+T     Find a mentor"),
        Line::from("   Ctrl+C     Quit"),
        Line::from("   F1 / ?     This help"),
        Line::from(""),
        Line::from(Span::styled(
            "        [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(46, lines.len() as u16, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}

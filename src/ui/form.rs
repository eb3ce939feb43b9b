use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::{AppState, Focus};
use crate::tags::MAX_TAGS;
use crate::toolbar::Format;
use crate::ui::layout::compute_form_layout;
use crate::ui::markdown::markdown_to_lines;

const TITLE_PLACEHOLDER: &str = "e.g. How do I handle race conditions in useEffect?";
const CONTENT_PLACEHOLDER: &str = "Describe the context of the problem and what you have tried...";
const TAG_PLACEHOLDER: &str = "Type a tag and press Enter...";

pub fn draw_form(f: &mut Frame, area: Rect, state: &AppState) {
    let layout = compute_form_layout(area);

    draw_header(f, layout.header);
    draw_lesson(f, layout.lesson, state);
    draw_title(f, layout.title, state);
    draw_content(f, layout.content, state);
    draw_tags(f, layout.tags, state);
    draw_actions(f, layout.actions, state);
}

fn field_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border)
}

fn placeholder(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Ask a question",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Write a clear title and give enough context about your problem.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_lesson(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Lesson;
    let text = match state.selected_lesson() {
        Some(lesson) => Span::styled(lesson.label(), Style::default().fg(Color::White)),
        None if state.lessons_loading => placeholder("Loading lessons..."),
        None if state.lessons.is_empty() => placeholder("No lessons available for questions"),
        None => placeholder("Select a lesson"),
    };

    let line = Line::from(vec![Span::raw(" "), text, Span::raw(" "), placeholder("▾")]);
    let widget = Paragraph::new(line).block(field_block(" Lesson * ".to_string(), focused));
    f.render_widget(widget, area);
}

fn draw_title(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Title;
    let inner_width = area.width.saturating_sub(2) as usize;
    let title = &state.draft.title;

    let (line, offset) = if title.value().is_empty() {
        (Line::from(placeholder(TITLE_PLACEHOLDER)), 0)
    } else {
        let offset = scroll_offset(title.cursor(), inner_width);
        let visible: String = title.value().chars().skip(offset).take(inner_width).collect();
        (Line::from(visible), offset)
    };

    let widget = Paragraph::new(line).block(field_block(" Title * ".to_string(), focused));
    f.render_widget(widget, area);

    if focused && !state.has_dialog() {
        let x = area.x + 1 + (title.cursor() - offset) as u16;
        f.set_cursor_position((x, area.y + 1));
    }
}

fn draw_content(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Content;
    let heading = if state.show_preview {
        " Content (preview) ".to_string()
    } else {
        " Content ".to_string()
    };
    let block = field_block(heading, focused);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Toolbar row
    let mut toolbar: Vec<Span> = vec![Span::raw(" ")];
    for (i, format) in Format::ALL.iter().enumerate() {
        if i > 0 {
            toolbar.push(Span::raw(" "));
        }
        toolbar.push(Span::styled(
            format!("[{}]", format.key()),
            Style::default().fg(Color::Cyan),
        ));
        toolbar.push(Span::styled(
            format.label().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let toolbar_area = Rect::new(inner.x, inner.y, inner.width, 1);
    f.render_widget(
        Paragraph::new(Line::from(toolbar)).style(Style::default().bg(Color::Rgb(30, 30, 30))),
        toolbar_area,
    );

    let text_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    let content = &state.draft.content;

    if state.show_preview {
        let widget = Paragraph::new(markdown_to_lines(content.value())).wrap(Wrap { trim: false });
        f.render_widget(widget, text_area);
        return;
    }

    if content.value().is_empty() {
        f.render_widget(Paragraph::new(Line::from(placeholder(CONTENT_PLACEHOLDER))), text_area);
    } else {
        let (row, col) = content.cursor_row_col();
        let v_offset = scroll_offset(row, text_area.height as usize);
        let h_offset = scroll_offset(col, text_area.width as usize);
        let lines: Vec<Line> = content
            .value()
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        let widget = Paragraph::new(lines).scroll((v_offset as u16, h_offset as u16));
        f.render_widget(widget, text_area);
    }

    if focused && !state.has_dialog() {
        let (row, col) = content.cursor_row_col();
        let y = (row - scroll_offset(row, text_area.height as usize)) as u16;
        let x = (col - scroll_offset(col, text_area.width as usize)) as u16;
        f.set_cursor_position((text_area.x + x, text_area.y + y));
    }
}

fn draw_tags(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Tags;
    let heading = format!(" Tags ({}/{}) ", state.draft.tags.len(), MAX_TAGS);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, tag) in state.draft.tags.as_slice().iter().enumerate() {
        let style = if focused && state.tag_cursor == Some(i) {
            Style::default().fg(Color::White).bg(Color::Red)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} × ", tag), style));
        spans.push(Span::raw(" "));
    }
    let prefix_width: usize = spans.iter().map(|s| s.width()).sum();

    let input = &state.tag_input;
    if input.value().is_empty() && !state.draft.tags.is_full() {
        spans.push(placeholder(TAG_PLACEHOLDER));
    } else {
        spans.push(Span::raw(input.value().to_string()));
    }

    let widget = Paragraph::new(Line::from(spans)).block(field_block(heading, focused));
    f.render_widget(widget, area);

    if focused && state.tag_cursor.is_none() && !state.has_dialog() {
        let x = area.x + 1 + (prefix_width + input.cursor()) as u16;
        if x < area.x + area.width.saturating_sub(1) {
            f.set_cursor_position((x, area.y + 1));
        }
    }
}

fn draw_actions(f: &mut Frame, area: Rect, state: &AppState) {
    let submit_style = if state.submitting {
        Style::default().fg(Color::DarkGray)
    } else if state.focus == Focus::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let cancel_style = if state.focus == Focus::Cancel {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[ {} ]", state.submit_label()), submit_style),
        Span::raw("  "),
        Span::styled("[ Cancel ]", cancel_style),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// First visible index so that `pos` stays inside a window of `width`.
fn scroll_offset(pos: usize, width: usize) -> usize {
    if width == 0 {
        return pos;
    }
    pos.saturating_sub(width - 1)
}

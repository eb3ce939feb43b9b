use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const TIPS: [(&str, &str); 3] = [
    (
        "Summarize the problem",
        "Briefly describe the specific issue you are facing.",
    ),
    (
        "Describe what you tried",
        "Explain what you attempted and why it did not work.",
    ),
    (
        "Include code snippets",
        "Put a reproducible code example right in the body.",
    ),
];

pub fn draw_sidebar(f: &mut Frame, area: Rect) {
    if area.width == 0 {
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    draw_tips(f, parts[0]);
    draw_mentoring(f, parts[1]);
}

fn draw_tips(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Better questions get expert answers faster.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for (i, (heading, detail)) in TIPS.iter().enumerate() {
        let marker_style = if i == 0 {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled("▸ ", marker_style),
            Span::styled(*heading, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", detail),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Tips for a good question ")
        .border_style(Style::default().fg(Color::DarkGray));
    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn draw_mentoring(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Need answers sooner? Book a live"),
        Line::from("session with a senior developer."),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Ctrl+T] ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Find a mentor →", Style::default().fg(Color::Cyan)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 1:1 Tutoring ")
        .border_style(Style::default().fg(Color::Cyan));
    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

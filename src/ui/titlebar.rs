use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_text = "[ askmentor: new question ]";

    let badge = if state.submitting {
        Span::styled(
            " submitting ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if state.session.is_authenticated() {
        Span::styled(" signed in ", Style::default().fg(Color::Rgb(200, 200, 120)))
    } else {
        Span::styled(" signed out ", Style::default().fg(Color::White).bg(Color::Red))
    };

    // Center the title, badge flush right
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let badge_len = badge.width();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + badge_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        Span::styled(
            title_text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(right_pad)),
        badge,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}

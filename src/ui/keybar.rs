use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Dialog, Focus};

/// Hints shown on every form field.
const FORM_KEYS: [(&str, &str); 3] = [("Ctrl+S", "post"), ("Ctrl+Q", "cancel"), ("F1", "help")];

pub fn bindings(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut keys = match state.top_dialog() {
        Some(Dialog::Alert { .. }) => return vec![("Enter", "ok")],
        Some(Dialog::LessonPicker { .. }) => {
            return vec![("↑/↓", "move"), ("Enter", "choose"), ("Esc", "close")]
        }
        Some(Dialog::Help) => return vec![("Esc", "close")],
        None => match state.focus {
            Focus::Lesson => vec![("Enter", "pick lesson"), ("Tab", "next field")],
            Focus::Title => vec![("Enter", "next field"), ("Tab", "next field")],
            Focus::Content => vec![
                ("Alt+B/I/K/L/N/G/C", "format"),
                ("Ctrl+P", "preview"),
                ("Ctrl+E", "editor"),
                ("Tab", "next field"),
            ],
            Focus::Tags => vec![
                ("Enter", "add tag"),
                ("←/Bksp", "select tag"),
                ("Del", "remove tag"),
                ("Tab", "next field"),
            ],
            Focus::Submit => vec![("Enter", "post"), ("Tab", "next")],
            Focus::Cancel => vec![("Enter", "back to questions"), ("Tab", "next")],
        },
    };
    keys.extend(FORM_KEYS);
    keys
}

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings = bindings(state);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn every_field_shows_cancel_and_help() {
        let mut state = AppState::new(Session::anonymous());
        for focus in [
            Focus::Lesson,
            Focus::Title,
            Focus::Content,
            Focus::Tags,
            Focus::Submit,
            Focus::Cancel,
        ] {
            state.focus = focus;
            let keys = bindings(&state);
            assert!(keys.contains(&("Ctrl+Q", "cancel")), "{:?}", focus);
            assert!(keys.contains(&("F1", "help")), "{:?}", focus);
        }
    }

    #[test]
    fn dialogs_replace_field_hints() {
        let mut state = AppState::new(Session::anonymous());
        state.push_dialog(Dialog::Help);
        assert_eq!(bindings(&state), [("Esc", "close")]);
    }
}

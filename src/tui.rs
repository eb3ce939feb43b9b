use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::api::QnaBackend;
use crate::editor;
use crate::model::Route;
use crate::state::*;
use crate::toolbar::{self, Format};
use crate::worker::{self, ApiEvent, ApiJob};

/// Work a key press asks the loop to do outside the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Api(ApiJob),
    OpenEditor,
}

/// How the page was left.
#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub route: Option<Route>,
    /// The user forced a quit while a question was still being posted.
    pub submit_pending: bool,
}

impl Exit {
    fn from_state(state: &AppState) -> Self {
        Self {
            route: state.navigation,
            submit_pending: state.submitting,
        }
    }
}

/// Runs the page until it navigates away or the user quits.
pub fn run_tui(mut state: AppState, backend: Arc<dyn QnaBackend>) -> Result<Exit, String> {
    let (api_tx, api_rx) = mpsc::channel::<ApiEvent>();

    // The session guard runs before the terminal is touched.
    match state.mount() {
        Some(job) => {
            worker::spawn_job(backend.clone(), job, api_tx.clone());
        }
        None => return Ok(Exit::from_state(&state)),
    }

    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend_term).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state, &backend, &api_tx, &api_rx);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|_| Exit::from_state(&state))
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    backend: &Arc<dyn QnaBackend>,
    api_tx: &mpsc::Sender<ApiEvent>,
    api_rx: &mpsc::Receiver<ApiEvent>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                match handle_key(key, state) {
                    Some(Effect::Api(job)) => {
                        worker::spawn_job(backend.clone(), job, api_tx.clone());
                    }
                    Some(Effect::OpenEditor) => edit_content(terminal, state),
                    None => {}
                }
            }
        }

        while let Ok(ev) = api_rx.try_recv() {
            state.handle_api_event(ev);
        }
    }

    Ok(())
}

fn edit_content(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, state: &mut AppState) {
    // Suspend terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    match editor::open_editor(state.draft.content.value()) {
        Ok(text) => {
            state.draft.content.set(&text);
            state.status_message = None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "external editor failed");
            state.status_message = Some(e);
        }
    }

    // Restore terminal
    execute!(terminal.backend_mut(), EnterAlternateScreen).ok();
    enable_raw_mode().ok();
    terminal.clear().ok();
}

pub fn handle_key(key: KeyEvent, state: &mut AppState) -> Option<Effect> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        state.quit();
        return None;
    }

    if state.has_dialog() {
        handle_dialog_key(key, state);
        return None;
    }

    if key.code == KeyCode::F(1) {
        state.push_dialog(Dialog::Help);
        return None;
    }

    // Global bindings
    if ctrl {
        match key.code {
            KeyCode::Char('s') => return state.begin_submit().map(Effect::Api),
            KeyCode::Char('q') => state.cancel(),
            KeyCode::Char('t') => state.open_mentor_directory(),
            KeyCode::Char('p') => state.show_preview = !state.show_preview,
            KeyCode::Char('e') => {
                state.focus = Focus::Content;
                return Some(Effect::OpenEditor);
            }
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return None;
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            return None;
        }
        KeyCode::Char('?') if !state.focus.is_text() => {
            state.push_dialog(Dialog::Help);
            return None;
        }
        _ => {}
    }

    match state.focus {
        Focus::Lesson => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down) {
                state.open_lesson_picker();
            }
            None
        }
        Focus::Title => {
            handle_title_key(key, state);
            None
        }
        Focus::Content => {
            handle_content_key(key, state);
            None
        }
        Focus::Tags => {
            handle_tag_key(key, state);
            None
        }
        Focus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => state.begin_submit().map(Effect::Api),
            _ => None,
        },
        Focus::Cancel => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.cancel();
            }
            None
        }
    }
}

fn handle_title_key(key: KeyEvent, state: &mut AppState) {
    let title = &mut state.draft.title;
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => title.insert_char(c),
        KeyCode::Backspace => title.backspace(),
        KeyCode::Delete => title.delete(),
        KeyCode::Left => title.move_left(),
        KeyCode::Right => title.move_right(),
        KeyCode::Home => title.home(),
        KeyCode::End => title.end(),
        KeyCode::Enter => state.focus = Focus::Content,
        _ => {}
    }
}

fn handle_content_key(key: KeyEvent, state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(c) = key.code {
            if let Some(format) = Format::from_key(c) {
                toolbar::apply(&mut state.draft.content, format);
                state.show_preview = false;
            }
        }
        return;
    }

    let content = &mut state.draft.content;
    match key.code {
        KeyCode::Char(c) => content.insert_char(c),
        KeyCode::Enter => content.insert_char('\n'),
        KeyCode::Backspace => content.backspace(),
        KeyCode::Delete => content.delete(),
        KeyCode::Left => content.move_left(),
        KeyCode::Right => content.move_right(),
        KeyCode::Up => content.move_up(),
        KeyCode::Down => content.move_down(),
        KeyCode::Home => content.home(),
        KeyCode::End => content.end(),
        _ => return,
    }
    state.show_preview = false;
}

fn handle_tag_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            state.tag_cursor = None;
            state.tag_input.insert_char(c);
        }
        KeyCode::Enter => state.commit_tag_input(),
        KeyCode::Backspace => {
            if state.tag_cursor.is_some() {
                state.remove_selected_tag();
            } else if state.tag_input.value().is_empty() {
                // First press selects the last tag, the second removes it.
                state.move_tag_cursor(-1);
            } else {
                state.tag_input.backspace();
            }
        }
        KeyCode::Delete => {
            if state.tag_cursor.is_some() {
                state.remove_selected_tag();
            } else {
                state.tag_input.delete();
            }
        }
        KeyCode::Left => {
            if state.tag_cursor.is_some() || state.tag_input.cursor() == 0 {
                state.move_tag_cursor(-1);
            } else {
                state.tag_input.move_left();
            }
        }
        KeyCode::Right => {
            if state.tag_cursor.is_some() {
                state.move_tag_cursor(1);
            } else {
                state.tag_input.move_right();
            }
        }
        KeyCode::Home => state.tag_input.home(),
        KeyCode::End => state.tag_input.end(),
        KeyCode::Esc => state.tag_cursor = None,
        _ => {}
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    let dialog = state.top_dialog().cloned();
    match dialog {
        Some(Dialog::Alert { .. }) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                state.dismiss_dialog();
            }
        }
        Some(Dialog::LessonPicker { .. }) => match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.move_picker(-1),
            KeyCode::Down | KeyCode::Char('j') => state.move_picker(1),
            KeyCode::PageUp | KeyCode::Home => state.move_picker(isize::MIN / 2),
            KeyCode::PageDown | KeyCode::End => state.move_picker(isize::MAX / 2),
            KeyCode::Enter => state.choose_picker(),
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::F(1)
            ) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}

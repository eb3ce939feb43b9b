use std::io::Write;

use crate::api::QnaBackend;
use crate::model::{LessonOption, Route};
use crate::session::Session;
use crate::state::AppState;
use crate::worker;

/// Exit code when the session guard sends the caller to login.
pub const NOT_SIGNED_IN: i32 = 2;

/// `--list-lessons`: runs the guard and the lesson loader without the UI.
/// Lessons go to `out`, notices to `err`. Returns the process exit code.
pub fn list_lessons(
    session: Session,
    backend: &dyn QnaBackend,
    web_base: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, String> {
    let mut state = AppState::new(session);
    if let Some(job) = state.mount() {
        state.handle_api_event(worker::run_job(backend, job));
    }

    if state.navigation == Some(Route::Login) {
        writeln!(out, "{}", login_notice(web_base)).map_err(write_error)?;
        return Ok(NOT_SIGNED_IN);
    }

    if state.lessons.is_empty() {
        writeln!(err, "No lessons available for questions.").map_err(write_error)?;
    }
    for lesson in &state.lessons {
        writeln!(out, "{}", format_lesson(lesson)).map_err(write_error)?;
    }
    Ok(0)
}

pub fn format_lesson(lesson: &LessonOption) -> String {
    format!(
        "{:>6}  {} ({})",
        lesson.lesson_id,
        lesson.label(),
        lesson.status.label()
    )
}

pub fn login_notice(web_base: &str) -> String {
    format!("Not signed in. Log in at {}", Route::Login.url(web_base))
}

fn write_error(e: std::io::Error) -> String {
    format!("Cannot write output: {}", e)
}

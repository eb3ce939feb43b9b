#![allow(dead_code)]

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use askmentor::api::{ApiError, QnaBackend};
use askmentor::model::{ApiResponse, LessonList, QuestionRequest};
use askmentor::session::Session;
use askmentor::state::AppState;
use askmentor::worker::{run_job, ApiJob};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    Ok,
    NotSuccessful,
    Unauthorized,
    ServerError,
}

/// In-memory stand-in for the platform API that counts calls.
pub struct FakeBackend {
    lessons: LessonList,
    lesson_reply: Reply,
    create_reply: Reply,
    pub lesson_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub last_request: Mutex<Option<QuestionRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            lessons: fixture_lessons(),
            lesson_reply: Reply::Ok,
            create_reply: Reply::Ok,
            lesson_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn lessons_reply(mut self, reply: Reply) -> Self {
        self.lesson_reply = reply;
        self
    }

    pub fn create_reply(mut self, reply: Reply) -> Self {
        self.create_reply = reply;
        self
    }

    pub fn lesson_calls(&self) -> usize {
        self.lesson_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<QuestionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

fn reply<T>(reply: Reply, data: Option<T>) -> Result<ApiResponse<T>, ApiError> {
    match reply {
        Reply::Ok => Ok(ApiResponse {
            success: true,
            data,
            message: None,
        }),
        Reply::NotSuccessful => Ok(ApiResponse {
            success: false,
            data: None,
            message: Some("rejected".to_string()),
        }),
        Reply::Unauthorized => Err(ApiError::Unauthorized),
        Reply::ServerError => Err(ApiError::Status {
            status: 500,
            message: "internal error".to_string(),
        }),
    }
}

impl QnaBackend for FakeBackend {
    fn my_lessons(&self) -> Result<ApiResponse<LessonList>, ApiError> {
        self.lesson_calls.fetch_add(1, Ordering::SeqCst);
        reply(self.lesson_reply, Some(self.lessons.clone()))
    }

    fn create_question(
        &self,
        request: &QuestionRequest,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        reply(self.create_reply, None)
    }
}

pub fn fixture_lessons() -> LessonList {
    let content =
        fs::read_to_string("fixtures/my_lessons.json").expect("Cannot read fixture");
    let resp: ApiResponse<LessonList> = serde_json::from_str(&content).unwrap();
    resp.data.unwrap()
}

pub fn signed_in() -> AppState {
    AppState::new(Session::new(Some("test-token".to_string()), None))
}

/// Runs a job synchronously and feeds the result back to the page.
pub fn drive(state: &mut AppState, backend: &FakeBackend, job: Option<ApiJob>) {
    if let Some(job) = job {
        state.handle_api_event(run_job(backend, job));
    }
}

/// Signed-in page with lessons loaded from the fixture.
pub fn mounted(backend: &FakeBackend) -> AppState {
    let mut state = signed_in();
    let job = state.mount();
    drive(&mut state, backend, job);
    state
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        let ev = if c == '\n' {
            key(KeyCode::Enter)
        } else {
            key(KeyCode::Char(c))
        };
        askmentor::tui::handle_key(ev, state);
    }
}

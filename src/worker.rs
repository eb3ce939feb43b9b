use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::api::{ApiError, QnaBackend};
use crate::model::{ApiResponse, LessonList, QuestionRequest};

/// Network work the page asks for. Each job is one request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiJob {
    LoadLessons,
    CreateQuestion(QuestionRequest),
}

#[derive(Debug)]
pub enum ApiEvent {
    LessonsLoaded(Result<ApiResponse<LessonList>, ApiError>),
    QuestionCreated(Result<ApiResponse<serde_json::Value>, ApiError>),
}

pub fn run_job(backend: &dyn QnaBackend, job: ApiJob) -> ApiEvent {
    match job {
        ApiJob::LoadLessons => ApiEvent::LessonsLoaded(backend.my_lessons()),
        ApiJob::CreateQuestion(request) => {
            ApiEvent::QuestionCreated(backend.create_question(&request))
        }
    }
}

/// Runs the job off the UI thread; the result comes back on `tx`.
pub fn spawn_job(
    backend: Arc<dyn QnaBackend>,
    job: ApiJob,
    tx: mpsc::Sender<ApiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let event = run_job(backend.as_ref(), job);
        // Receiver is gone once the UI has exited.
        let _ = tx.send(event);
    })
}

use crate::api::ApiError;
use crate::draft::DraftQuestion;
use crate::input::TextInput;
use crate::model::{ApiResponse, LessonList, LessonOption, Route};
use crate::session::Session;
use crate::tags::{TagAdd, MAX_TAGS};
use crate::worker::{ApiEvent, ApiJob};

pub const POSTED_MESSAGE: &str = "Your question has been posted.";
pub const POST_FAILED_MESSAGE: &str = "Failed to post your question.";
pub const DUPLICATE_TAG_MESSAGE: &str = "Tag already added";
pub const BUSY_MESSAGE: &str = "Still posting your question...";
pub const QUIT_PENDING_MESSAGE: &str = "Your question is still being posted. Press Ctrl+C again to quit anyway.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Lesson,
    Title,
    Content,
    Tags,
    Submit,
    Cancel,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Lesson,
        Focus::Title,
        Focus::Content,
        Focus::Tags,
        Focus::Submit,
        Focus::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_text(self) -> bool {
        matches!(self, Focus::Title | Focus::Content | Focus::Tags)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Notice,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Blocking message; `then` is followed once it is dismissed.
    Alert {
        kind: AlertKind,
        message: String,
        then: Option<Route>,
    },
    /// Row 0 is the empty "Select a lesson" option.
    LessonPicker { cursor: usize },
    Help,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Session,
    pub draft: DraftQuestion,
    pub tag_input: TextInput,
    pub tag_cursor: Option<usize>,
    pub lessons: Vec<LessonOption>,
    pub lessons_loading: bool,
    pub focus: Focus,
    pub dialog_stack: Vec<Dialog>,
    pub submitting: bool,
    pub show_preview: bool,
    pub status_message: Option<String>,
    pub navigation: Option<Route>,
    pub should_quit: bool,
    /// Set by the first Ctrl+C while a submission is in flight.
    pub quit_armed: bool,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            draft: DraftQuestion::new(),
            tag_input: TextInput::new(),
            tag_cursor: None,
            lessons: Vec::new(),
            lessons_loading: false,
            focus: Focus::Lesson,
            dialog_stack: Vec::new(),
            submitting: false,
            show_preview: false,
            status_message: None,
            navigation: None,
            should_quit: false,
            quit_armed: false,
        }
    }

    /// Page entry: checks the session, then asks for the lesson list.
    pub fn mount(&mut self) -> Option<ApiJob> {
        if !self.check_session() {
            return None;
        }
        self.lessons_loading = true;
        Some(ApiJob::LoadLessons)
    }

    /// Redirects to login when the session is no longer valid.
    pub fn check_session(&mut self) -> bool {
        if self.session.is_authenticated() {
            return true;
        }
        tracing::warn!("not signed in, redirecting to login");
        self.navigate(Route::Login);
        false
    }

    /// Leaves the page. Only the first navigation counts.
    pub fn navigate(&mut self, route: Route) {
        if self.navigation.is_none() {
            tracing::debug!(route = route.path(), "navigating");
            self.navigation = Some(route);
        }
        self.should_quit = true;
    }

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::LessonsLoaded(result) => self.apply_lessons(result),
            ApiEvent::QuestionCreated(result) => self.finish_submit(result),
        }
    }

    pub fn apply_lessons(&mut self, result: Result<ApiResponse<LessonList>, ApiError>) {
        self.lessons_loading = false;
        match result {
            Ok(ApiResponse {
                success: true,
                data: Some(list),
                ..
            }) => {
                let total = list.lessons.len();
                self.lessons = list
                    .lessons
                    .into_iter()
                    .filter(|l| l.status.accepts_questions())
                    .collect();
                tracing::info!(total, eligible = self.lessons.len(), "lessons loaded");
            }
            Ok(resp) => {
                tracing::error!(message = ?resp.message, "lesson list request was not successful");
            }
            Err(ApiError::Unauthorized) => self.handle_unauthorized(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load lessons");
            }
        }
    }

    pub fn selected_lesson(&self) -> Option<&LessonOption> {
        let id = self.draft.lesson_id?;
        self.lessons.iter().find(|l| l.lesson_id == id)
    }

    pub fn select_lesson(&mut self, lesson_id: Option<i64>) {
        self.draft.lesson_id = lesson_id;
    }

    pub fn open_lesson_picker(&mut self) {
        let cursor = self
            .draft
            .lesson_id
            .and_then(|id| self.lessons.iter().position(|l| l.lesson_id == id))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.push_dialog(Dialog::LessonPicker { cursor });
    }

    pub fn move_picker(&mut self, delta: isize) {
        let rows = self.lessons.len() + 1;
        if let Some(Dialog::LessonPicker { cursor }) = self.dialog_stack.last_mut() {
            let next = (*cursor as isize + delta).clamp(0, rows as isize - 1);
            *cursor = next as usize;
        }
    }

    pub fn choose_picker(&mut self) {
        if let Some(Dialog::LessonPicker { cursor }) = self.top_dialog().cloned() {
            self.pop_dialog();
            let chosen = cursor
                .checked_sub(1)
                .and_then(|i| self.lessons.get(i))
                .map(|l| l.lesson_id);
            self.select_lesson(chosen);
        }
    }

    /// Enter in the tag field. A refused tag stays in the input only when
    /// the list is full.
    pub fn commit_tag_input(&mut self) {
        match self.draft.tags.add(self.tag_input.value()) {
            TagAdd::Empty => return,
            TagAdd::Full => {
                self.status_message = Some(format!("Up to {} tags per question", MAX_TAGS));
                return;
            }
            TagAdd::Duplicate => {
                self.status_message = Some(DUPLICATE_TAG_MESSAGE.to_string());
            }
            TagAdd::Added => self.status_message = None,
        }
        self.tag_input.clear();
        self.tag_cursor = None;
    }

    pub fn remove_tag(&mut self, tag: &str) {
        if self.draft.tags.remove(tag) {
            self.tag_cursor = match self.tag_cursor {
                Some(_) if self.draft.tags.is_empty() => None,
                Some(i) => Some(i.min(self.draft.tags.len() - 1)),
                None => None,
            };
        }
    }

    pub fn remove_selected_tag(&mut self) {
        let selected = self
            .tag_cursor
            .and_then(|i| self.draft.tags.get(i))
            .map(|t| t.to_string());
        if let Some(tag) = selected {
            self.remove_tag(&tag);
        }
    }

    pub fn move_tag_cursor(&mut self, delta: isize) {
        let len = self.draft.tags.len();
        if len == 0 {
            self.tag_cursor = None;
            return;
        }
        self.tag_cursor = match self.tag_cursor {
            None if delta < 0 => Some(len - 1),
            None => None,
            Some(i) => {
                let next = i as isize + delta;
                if next >= len as isize {
                    None
                } else {
                    Some(next.max(0) as usize)
                }
            }
        };
    }

    /// Validates the draft and, if it passes, hands back the create call.
    /// Returns nothing while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ApiJob> {
        if self.submitting {
            return None;
        }
        match self.draft.validate() {
            Err(e) => {
                self.alert(AlertKind::Notice, e.to_string(), None);
                None
            }
            Ok(request) => {
                self.submitting = true;
                Some(ApiJob::CreateQuestion(request))
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<ApiResponse<serde_json::Value>, ApiError>) {
        self.submitting = false;
        self.quit_armed = false;
        if matches!(
            self.status_message.as_deref(),
            Some(BUSY_MESSAGE) | Some(QUIT_PENDING_MESSAGE)
        ) {
            self.status_message = None;
        }
        match result {
            Ok(resp) if resp.success => {
                tracing::info!(lesson_id = ?self.draft.lesson_id, "question posted");
                self.alert(
                    AlertKind::Success,
                    POSTED_MESSAGE.to_string(),
                    Some(Route::QuestionList),
                );
            }
            Ok(resp) => {
                tracing::error!(message = ?resp.message, "question was rejected");
                self.alert(AlertKind::Failure, POST_FAILED_MESSAGE.to_string(), None);
            }
            Err(ApiError::Unauthorized) => self.handle_unauthorized(),
            Err(e) => {
                tracing::error!(error = %e, "failed to post question");
                self.alert(AlertKind::Failure, POST_FAILED_MESSAGE.to_string(), None);
            }
        }
    }

    pub fn cancel(&mut self) {
        if !self.busy() {
            self.navigate(Route::QuestionList);
        }
    }

    pub fn open_mentor_directory(&mut self) {
        if !self.busy() {
            self.navigate(Route::MentorDirectory);
        }
    }

    /// Ctrl+C. With a submission in flight the first press only warns.
    pub fn quit(&mut self) {
        if self.submitting && !self.quit_armed {
            self.quit_armed = true;
            self.status_message = Some(QUIT_PENDING_MESSAGE.to_string());
            return;
        }
        self.should_quit = true;
    }

    fn busy(&mut self) -> bool {
        if self.submitting {
            self.status_message = Some(BUSY_MESSAGE.to_string());
        }
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Submitting..."
        } else {
            "Post question"
        }
    }

    fn handle_unauthorized(&mut self) {
        self.session.invalidate();
        self.check_session();
    }

    pub fn alert(&mut self, kind: AlertKind, message: String, then: Option<Route>) {
        self.push_dialog(Dialog::Alert {
            kind,
            message,
            then,
        });
    }

    pub fn dismiss_dialog(&mut self) {
        if let Some(Dialog::Alert {
            then: Some(route), ..
        }) = self.pop_dialog()
        {
            self.navigate(route);
        }
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LessonStatus {
    Requested,
    Confirmed,
    Scheduled,
    Completed,
    Cancelled,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LessonStatus {
    /// Questions can only be asked about lessons that are booked or done.
    pub fn accepts_questions(self) -> bool {
        matches!(
            self,
            LessonStatus::Confirmed | LessonStatus::Scheduled | LessonStatus::Completed
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            LessonStatus::Requested => "requested",
            LessonStatus::Confirmed => "confirmed",
            LessonStatus::Scheduled => "scheduled",
            LessonStatus::Completed => "completed",
            LessonStatus::Cancelled => "cancelled",
            LessonStatus::Rejected => "rejected",
            LessonStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonOption {
    pub lesson_id: i64,
    pub tutorial_title: String,
    pub mentor_name: String,
    pub status: LessonStatus,
}

impl LessonOption {
    pub fn label(&self) -> String {
        format!("{} - {} (mentor)", self.tutorial_title, self.mentor_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonList {
    #[serde(default)]
    pub lessons: Vec<LessonOption>,
}

/// Envelope every platform endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRequest {
    #[serde(skip)]
    pub lesson_id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    QuestionList,
    MentorDirectory,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::QuestionList => "/qna",
            Route::MentorDirectory => "/mentors",
        }
    }

    pub fn url(self, web_base: &str) -> String {
        format!("{}{}", web_base.trim_end_matches('/'), self.path())
    }

    pub fn describe(self) -> &'static str {
        match self {
            Route::Login => "log in",
            Route::QuestionList => "question list",
            Route::MentorDirectory => "mentor directory",
        }
    }
}

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{ApiResponse, LessonList, QuestionRequest};
use crate::session::Session;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("session is not authorized")]
    Unauthorized,
    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("cannot decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two platform calls the question page depends on.
pub trait QnaBackend: Send + Sync {
    fn my_lessons(&self) -> Result<ApiResponse<LessonList>, ApiError>;

    fn create_question(
        &self,
        request: &QuestionRequest,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError>;
}

pub struct HttpBackend {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(api_base: &str, session: &Session, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("askmentor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: session.token().map(|t| t.to_string()),
        })
    }

    pub fn lessons_url(&self) -> String {
        format!("{}/lessons/my", self.api_base)
    }

    pub fn question_url(&self, lesson_id: i64) -> String {
        format!("{}/qna/lessons/{}/questions", self.api_base, lesson_id)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl QnaBackend for HttpBackend {
    fn my_lessons(&self) -> Result<ApiResponse<LessonList>, ApiError> {
        let url = self.lessons_url();
        tracing::debug!(%url, "fetching lessons");
        let resp = self.authorized(self.client.get(&url)).send()?;
        read_envelope(resp)
    }

    fn create_question(
        &self,
        request: &QuestionRequest,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let url = self.question_url(request.lesson_id);
        tracing::debug!(%url, tags = request.tags.len(), "creating question");
        let resp = self
            .authorized(self.client.post(&url))
            .json(request)
            .send()?;
        read_envelope(resp)
    }
}

fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    let body = resp.text()?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: summarize(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

fn summarize(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > 200 {
        let head: String = trimmed.chars().take(200).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        let session = Session::new(Some("tok".to_string()), None);
        HttpBackend::new(base, &session, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_urls() {
        let b = backend("https://api.mentor.dev/api/");
        assert_eq!(b.lessons_url(), "https://api.mentor.dev/api/lessons/my");
        assert_eq!(b.question_url(42), "https://api.mentor.dev/api/qna/lessons/42/questions");
    }

    #[test]
    fn long_error_bodies_are_cut() {
        let body = "x".repeat(500);
        let short = summarize(&body);
        assert_eq!(short.len(), 203);
        assert!(short.ends_with("..."));
    }

    fn request(tags: &[&str]) -> QuestionRequest {
        QuestionRequest {
            lesson_id: 7,
            title: "Effect runs twice".to_string(),
            content: "StrictMode?".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn unauthorized_response_maps_to_unauthorized() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/lessons/my")
            .with_status(401)
            .with_body(r#"{"success":false,"message":"expired"}"#)
            .create();

        let result = backend(&server.url()).my_lessons();
        mock.assert();
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn server_error_maps_to_status() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/lessons/my")
            .with_status(500)
            .with_body("  boom  ")
            .create();

        match backend(&server.url()).my_lessons() {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[test]
    fn unsuccessful_envelope_is_passed_through() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/lessons/my")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":false,"message":"no lessons"}"#)
            .create();

        let resp = backend(&server.url()).my_lessons().unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("no lessons"));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/lessons/my")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();

        let result = backend(&server.url()).my_lessons();
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn lessons_request_carries_bearer_token() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/lessons/my")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(r#"{"success":true,"data":{"lessons":[
                {"lessonId":3,"tutorialTitle":"Rust","mentorName":"Kim","status":"CONFIRMED"}
            ]}}"#)
            .create();

        let resp = backend(&server.url()).my_lessons().unwrap();
        mock.assert();
        assert_eq!(resp.data.unwrap().lessons[0].lesson_id, 3);
    }

    #[test]
    fn create_question_posts_title_content_and_tags() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/qna/lessons/7/questions")
            .match_header("authorization", "Bearer tok")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "title": "Effect runs twice",
                "content": "StrictMode?",
                "tags": ["react", "hooks"],
            })))
            .with_status(200)
            .with_body(r#"{"success":true,"data":{"questionId":55}}"#)
            .create();

        let resp = backend(&server.url())
            .create_question(&request(&["react", "hooks"]))
            .unwrap();
        mock.assert();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap()["questionId"], 55);
    }

    #[test]
    fn create_question_unauthorized() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/qna/lessons/7/questions")
            .with_status(401)
            .create();

        let result = backend(&server.url()).create_question(&request(&[]));
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn anonymous_backend_has_no_token() {
        let b = HttpBackend::new("http://localhost", &Session::anonymous(), Duration::from_secs(1))
            .unwrap();
        assert!(b.token.is_none());
    }
}

use thiserror::Error;

use crate::input::TextInput;
use crate::model::QuestionRequest;
use crate::tags::TagList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title and content.")]
    MissingTitleOrContent,
    #[error("Please select a lesson.")]
    MissingLesson,
}

/// The unsaved question being composed. Lives only as long as the page.
#[derive(Debug, Clone, Default)]
pub struct DraftQuestion {
    pub title: TextInput,
    pub content: TextInput,
    pub lesson_id: Option<i64>,
    pub tags: TagList,
}

impl DraftQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks title/content before the lesson, and builds the request body
    /// from the trimmed fields.
    pub fn validate(&self) -> Result<QuestionRequest, ValidationError> {
        if self.title.is_blank() || self.content.is_blank() {
            return Err(ValidationError::MissingTitleOrContent);
        }
        let lesson_id = self.lesson_id.ok_or(ValidationError::MissingLesson)?;

        Ok(QuestionRequest {
            lesson_id,
            title: self.title.value().trim().to_string(),
            content: self.content.value().trim().to_string(),
            tags: self.tags.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DraftQuestion {
        let mut draft = DraftQuestion::new();
        draft.title.set("  How do I pin a future?  ");
        draft.content.set("\nI tried Box::pin.\n");
        draft.lesson_id = Some(12);
        draft
    }

    #[test]
    fn trims_title_and_content() {
        let req = filled().validate().unwrap();
        assert_eq!(req.lesson_id, 12);
        assert_eq!(req.title, "How do I pin a future?");
        assert_eq!(req.content, "I tried Box::pin.");
    }

    #[test]
    fn title_and_content_are_checked_before_lesson() {
        let mut draft = filled();
        draft.lesson_id = None;
        draft.content.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitleOrContent));
    }

    #[test]
    fn missing_lesson() {
        let mut draft = filled();
        draft.lesson_id = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingLesson));
    }
}

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// A single step in a survey.
///
/// Deserializes from the static question data format:
/// `{ "id": "q1", "title": "What did you think?", "type": "feedback" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The key this question's answer is stored under.
    id: QuestionId,

    /// The prompt text shown to the user.
    title: String,

    /// The declared kind of the question.
    #[serde(rename = "type", default)]
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(id: impl Into<QuestionId>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
        }
    }

    /// Create a free-text feedback question.
    pub fn feedback(id: impl Into<QuestionId>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Feedback)
    }

    /// Create a contact question.
    pub fn contact(id: impl Into<QuestionId>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Contact)
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the declared kind.
    ///
    /// Informational only: the survey treats the last question as the contact
    /// step regardless of what it declares here.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }
}

/// The declared kind of a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-text answer.
    #[default]
    Feedback,

    /// Name and email.
    Contact,
}

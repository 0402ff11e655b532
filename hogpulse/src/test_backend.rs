//! Test backend for running surveys without user interaction.
//!
//! `TestBackend` replays a scripted list of [`Action`]s against a
//! [`SurveyController`], the same way an interactive backend feeds it key
//! presses. This is useful for testing survey flows end to end.
//!
//! # Example
//!
//! ```rust
//! use hogpulse::{ContactField, Question, SurveyDefinition, TestBackend};
//!
//! let survey = SurveyDefinition::new(vec![
//!     Question::feedback("q1", "What did you think?"),
//!     Question::contact("q2", "Contact"),
//! ]);
//!
//! let responses = hogpulse::run(
//!     &survey,
//!     TestBackend::new()
//!         .with_feedback("loved it")
//!         .with_next()
//!         .with_contact(ContactField::Name, "Ada")
//!         .with_submit(),
//! )
//! .unwrap();
//!
//! assert_eq!(responses.feedback("q1"), "loved it");
//! assert_eq!(responses.contact("q2").name, "Ada");
//! ```

use hogpulse_types::{ContactField, Responses, SurveyBackend, SurveyDefinition};

use crate::{Action, SurveyController};

/// A test backend that replays pre-configured actions.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    script: Vec<Action>,
    /// Leave the survey once the script runs out, like pressing Esc.
    cancel_at_end: bool,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Script ended on question {index} before the survey was submitted")]
    Incomplete { index: usize },

    #[error("Script cancelled the survey")]
    Cancelled,
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self {
            script: Vec::new(),
            cancel_at_end: false,
        }
    }

    /// Append an action to the script.
    pub fn with_action(mut self, action: Action) -> Self {
        self.script.push(action);
        self
    }

    /// Append several actions to the script.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.script.extend(actions);
        self
    }

    /// Type feedback text into the current step.
    pub fn with_feedback(self, text: impl Into<String>) -> Self {
        self.with_action(Action::RecordFeedback(text.into()))
    }

    /// Type into one contact field on the current step.
    pub fn with_contact(self, field: ContactField, value: impl Into<String>) -> Self {
        self.with_action(Action::RecordContactField {
            field,
            value: value.into(),
        })
    }

    pub fn with_next(self) -> Self {
        self.with_action(Action::Next)
    }

    pub fn with_previous(self) -> Self {
        self.with_action(Action::Previous)
    }

    pub fn with_submit(self) -> Self {
        self.with_action(Action::Submit)
    }

    /// Cancel the survey after the scripted actions if it is still active.
    pub fn with_cancel(mut self) -> Self {
        self.cancel_at_end = true;
        self
    }
}

impl SurveyBackend for TestBackend {
    type Error = TestBackendError;

    fn collect(&self, definition: &SurveyDefinition) -> Result<Responses, Self::Error> {
        let mut controller = SurveyController::new(definition.clone());
        if definition.is_empty() {
            return Ok(controller.into_responses());
        }

        for action in &self.script {
            controller.dispatch(action.clone());
            if controller.is_complete() {
                // Anything scripted after submission would be a no-op anyway.
                break;
            }
        }

        if controller.is_complete() {
            Ok(controller.into_responses())
        } else if self.cancel_at_end {
            Err(TestBackendError::Cancelled)
        } else {
            Err(TestBackendError::Incomplete {
                index: controller.current_index(),
            })
        }
    }

    fn is_cancellation(error: &Self::Error) -> bool {
        matches!(error, TestBackendError::Cancelled)
    }
}

use crate::{Responses, SurveyDefinition};

/// Trait for backend implementations that present a survey to a user.
///
/// Backends receive a `SurveyDefinition` and return the `Responses` that
/// were on record when the user submitted the last step. They decide how the
/// survey is shown (terminal UI, scripted replay, ...).
pub trait SurveyBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the survey until it is submitted.
    ///
    /// # Returns
    /// * `Ok(responses)` once the final step is submitted, or immediately
    ///   with no responses if the survey has no questions
    /// * `Err` on cancellation or backend failure
    fn collect(&self, definition: &SurveyDefinition) -> Result<Responses, Self::Error>;

    /// Whether an error returned by `collect` means the user cancelled.
    ///
    /// Lets callers tell a deliberate exit apart from a failure without
    /// knowing the concrete error type.
    fn is_cancellation(_error: &Self::Error) -> bool {
        false
    }
}

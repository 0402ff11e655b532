use crate::Question;

/// The top-level structure containing all questions and copy for a survey.
///
/// The question order is the step order. The last question is always the
/// contact step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyDefinition {
    /// Optional kicker shown above every question title.
    pub prelude: Option<String>,

    /// All questions in the survey, in step order.
    pub questions: Vec<Question>,

    /// Optional message shown after the survey is submitted.
    pub epilogue: Option<String>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Create an empty survey definition.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at a step index.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Index of the contact step, if there is any step at all.
    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_index_marks_the_contact_step() {
        assert_eq!(SurveyDefinition::empty().last_index(), None);

        let survey = SurveyDefinition::new(vec![
            Question::feedback("q1", "What did you think?"),
            Question::contact("q2", "Contact"),
        ]);
        assert_eq!(survey.last_index(), Some(1));
    }
}

//! Loading the static question list.
//!
//! Questions are a JSON array of `{ "id", "title", "type" }` records. A set is
//! compiled into the crate from `data/questions.json`; a different file can be
//! loaded at startup instead.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use hogpulse_types::{Question, QuestionId, QuestionKind, SurveyDefinition};
use tracing::{debug, warn};

const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");

/// Header kicker shown above every question.
pub const DEFAULT_PRELUDE: &str = "HogPulse Live Feedback";

/// Message shown once the survey is submitted.
pub const DEFAULT_EPILOGUE: &str = "Your answers are in. We will keep building with your feedback in mind.";

/// Error type for question loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read questions from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate question id: {0}")]
    DuplicateId(QuestionId),
}

/// Parse a question list from JSON text.
///
/// Ids must be unique. A declared `type` that disagrees with the question's
/// position is accepted with a warning, since the last question is the
/// contact step either way.
pub fn from_json_str(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for question in &questions {
        if !seen.insert(question.id()) {
            return Err(LoadError::DuplicateId(question.id().clone()));
        }
    }

    let last = questions.len().saturating_sub(1);
    for (index, question) in questions.iter().enumerate() {
        match (question.kind(), index == last) {
            (QuestionKind::Contact, false) => warn!(
                id = %question.id(),
                index,
                "contact question is not last and will be shown as a feedback step"
            ),
            (QuestionKind::Feedback, true) => warn!(
                id = %question.id(),
                "last question is declared feedback and will be shown as the contact step"
            ),
            _ => {}
        }
    }

    debug!(count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Read and parse a question list from a file.
pub fn from_path(path: &Path) -> Result<Vec<Question>, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&json)
}

/// The question list compiled into the crate.
pub fn bundled() -> Vec<Question> {
    // The bundled file is covered by a test; an empty survey is the safe
    // fallback should it ever stop parsing.
    from_json_str(BUNDLED_QUESTIONS).unwrap_or_else(|err| {
        warn!(%err, "bundled questions failed to load");
        Vec::new()
    })
}

/// The bundled questions with the default header and closing copy.
pub fn default_survey() -> SurveyDefinition {
    SurveyDefinition::new(bundled())
        .with_prelude(DEFAULT_PRELUDE)
        .with_epilogue(DEFAULT_EPILOGUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_questions_parse() {
        let questions = from_json_str(BUNDLED_QUESTIONS).unwrap();
        assert!(!questions.is_empty());
        assert_eq!(
            questions.last().map(Question::kind),
            Some(QuestionKind::Contact)
        );
    }

    #[test]
    fn parses_in_order() {
        let questions = from_json_str(
            r#"[
                {"id": "q1", "title": "What did you think?", "type": "feedback"},
                {"id": "q2", "title": "Contact", "type": "contact"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            questions,
            vec![
                Question::feedback("q1", "What did you think?"),
                Question::contact("q2", "Contact"),
            ]
        );
    }

    #[test]
    fn empty_list_is_allowed() {
        assert!(from_json_str("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = from_json_str(
            r#"[{"id": "q1", "title": "A"}, {"id": "q1", "title": "B", "type": "contact"}]"#,
        );
        assert!(matches!(result, Err(LoadError::DuplicateId(id)) if id.as_str() == "q1"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            from_json_str(r#"[{"title": "no id"}]"#),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            from_json_str(r#"[{"id": "q1", "title": "A", "type": "rating"}]"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn default_survey_has_copy() {
        let survey = default_survey();
        assert_eq!(survey.prelude.as_deref(), Some(DEFAULT_PRELUDE));
        assert_eq!(survey.epilogue.as_deref(), Some(DEFAULT_EPILOGUE));
        assert_eq!(survey.len(), bundled().len());
    }
}

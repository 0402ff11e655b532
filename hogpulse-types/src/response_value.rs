use serde::{Deserialize, Serialize};

use crate::ContactInfo;

/// A single response value collected from the survey.
///
/// This is the value stored in `Responses` for each answered question.
/// Serialized untagged: feedback is a plain JSON string and a contact answer
/// is a `{ "name": ..., "email": ... }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Free-text answer to a feedback step.
    Feedback(String),

    /// Name and email from the contact step.
    Contact(ContactInfo),
}

impl ResponseValue {
    /// Try to get this value as feedback text.
    pub fn as_feedback(&self) -> Option<&str> {
        match self {
            Self::Feedback(text) => Some(text),
            Self::Contact(_) => None,
        }
    }

    /// Try to get this value as a contact record.
    pub fn as_contact(&self) -> Option<&ContactInfo> {
        match self {
            Self::Contact(contact) => Some(contact),
            Self::Feedback(_) => None,
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Feedback(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Feedback(s.to_string())
    }
}

impl From<ContactInfo> for ResponseValue {
    fn from(contact: ContactInfo) -> Self {
        Self::Contact(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_the_page_shape() {
        let feedback = ResponseValue::from("loved it");
        assert_eq!(serde_json::to_string(&feedback).unwrap(), r#""loved it""#);

        let contact = ResponseValue::from(ContactInfo::new("Ada", ""));
        assert_eq!(
            serde_json::to_string(&contact).unwrap(),
            r#"{"name":"Ada","email":""}"#
        );
    }

    #[test]
    fn accessors_match_variant() {
        let feedback = ResponseValue::from("meh");
        assert_eq!(feedback.as_feedback(), Some("meh"));
        assert!(feedback.as_contact().is_none());
    }
}

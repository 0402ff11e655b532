use std::collections::HashMap;

use serde::Serialize;

use crate::{ContactInfo, QuestionId, ResponseValue};

/// Collected responses from a survey session.
///
/// Keyed by the id of the question that owns each answer. Never persisted;
/// the store lives as long as the session that fills it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Responses {
    values: HashMap<QuestionId, ResponseValue>,
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a response for the given question, replacing any prior value.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<ResponseValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the response for the given question.
    pub fn get(&self, id: &str) -> Option<&ResponseValue> {
        self.values.get(id)
    }

    /// Check if a response exists for the given question.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &ResponseValue)> {
        self.values.iter()
    }

    /// Get the number of responses.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no responses.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Display accessors ===
    //
    // These never fail: a missing answer, or one of the other shape, reads
    // as an empty value.

    /// Feedback text for the given question, or `""`.
    pub fn feedback(&self, id: &str) -> &str {
        self.get(id)
            .and_then(ResponseValue::as_feedback)
            .unwrap_or_default()
    }

    /// Contact record for the given question, or an empty one.
    pub fn contact(&self, id: &str) -> ContactInfo {
        self.get(id)
            .and_then(ResponseValue::as_contact)
            .cloned()
            .unwrap_or_default()
    }
}

impl IntoIterator for Responses {
    type Item = (QuestionId, ResponseValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Responses {
    type Item = (&'a QuestionId, &'a ResponseValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

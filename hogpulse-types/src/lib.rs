//! Core types for the hogpulse feedback survey.
//!
//! This crate provides the foundational types for defining a survey:
//! - `SurveyDefinition` - The ordered question list plus header and closing copy
//! - `Question` and `QuestionKind` - Individual survey steps
//! - `Responses`, `ResponseValue` and `ContactInfo` - Collected answers keyed by `QuestionId`
//! - `SurveyBackend` trait - For implementing presentation backends

mod question_id;
pub use question_id::QuestionId;

mod contact;
pub use contact::{ContactField, ContactInfo};

mod response_value;
pub use response_value::ResponseValue;

mod responses;
pub use responses::Responses;

mod question;
pub use question::{Question, QuestionKind};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::SurveyBackend;

//! The survey step controller.
//!
//! All session state lives in [`SessionState`], an owned value updated by a
//! single pure reducer, [`SessionState::reduce`]. [`SurveyController`] pairs
//! that state with the [`SurveyDefinition`] it runs against and is what
//! backends drive from their event loops.
//!
//! The step machine is small:
//!
//! ```text
//! Active(i) --Previous/Next/Record*--> Active(i')
//! Active(last) --Submit--> Complete
//! ```
//!
//! `Complete` is terminal. The last question is always the contact step.

use hogpulse_types::{
    ContactField, ContactInfo, Question, ResponseValue, Responses, SurveyDefinition,
};
use tracing::{debug, info};

/// One user intent, fed to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move one step back, wrapping from the first step to the last.
    Previous,

    /// Move one step forward, wrapping from the last step to the first.
    Next,

    /// Replace the feedback text of the current step.
    RecordFeedback(String),

    /// Replace one field of the contact answer on the contact step.
    RecordContactField { field: ContactField, value: String },

    /// Advance, or complete the survey when on the last step.
    Submit,
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Active,
    Complete,
}

/// The state of one survey session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    current_index: usize,
    responses: Responses,
    phase: Phase,
}

impl SessionState {
    /// A fresh session on the first step with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn into_responses(self) -> Responses {
        self.responses
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Apply one action and return the next state.
    ///
    /// With no questions, or once complete, every action returns the state
    /// unchanged.
    pub fn reduce(mut self, definition: &SurveyDefinition, action: Action) -> Self {
        let Some(last) = definition.last_index() else {
            debug!(?action, "ignoring action on empty survey");
            return self;
        };
        if self.is_complete() {
            debug!(?action, "ignoring action on completed survey");
            return self;
        }

        let total = last + 1;
        self.current_index %= total;

        match action {
            Action::Previous => {
                self.current_index = (self.current_index + total - 1) % total;
                debug!(index = self.current_index, total, "moved to previous question");
            }
            Action::Next => {
                self.current_index = (self.current_index + 1) % total;
                debug!(index = self.current_index, total, "moved to next question");
            }
            Action::RecordFeedback(text) => {
                if self.current_index == last {
                    debug!("ignoring feedback text on the contact step");
                } else if let Some(question) = definition.question(self.current_index) {
                    self.responses
                        .insert(question.id().clone(), ResponseValue::Feedback(text));
                }
            }
            Action::RecordContactField { field, value } => {
                if self.current_index != last {
                    debug!(?field, "ignoring contact field outside the contact step");
                } else if let Some(question) = definition.question(last) {
                    let updated = self
                        .responses
                        .contact(question.id().as_str())
                        .with_field(field, value);
                    self.responses
                        .insert(question.id().clone(), ResponseValue::Contact(updated));
                }
            }
            Action::Submit => {
                if self.current_index == last {
                    self.phase = Phase::Complete;
                    info!(responses = self.responses.len(), "survey submitted");
                } else {
                    self.current_index += 1;
                    debug!(index = self.current_index, total, "submitted step, advancing");
                }
            }
        }

        self
    }
}

/// The value shown in the input area of the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue<'a> {
    Feedback(&'a str),
    Contact(ContactInfo),
}

/// Presentation data for the current step, derived on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView<'a> {
    pub index: usize,
    pub total: usize,
    pub question: &'a Question,
    pub value: StepValue<'a>,
}

impl StepView<'_> {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }

    /// The contact step is the last step, whatever the question declares.
    pub fn is_contact_step(&self) -> bool {
        self.is_last()
    }

    /// Whether the "previous" affordance is shown.
    pub fn shows_previous(&self) -> bool {
        !self.is_first()
    }

    /// Whether the "next" affordance is shown.
    pub fn shows_next(&self) -> bool {
        !self.is_last()
    }

    /// One-based position and total, for "Question i of n".
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.total)
    }
}

/// A survey definition together with the session running against it.
#[derive(Debug, Clone)]
pub struct SurveyController {
    definition: SurveyDefinition,
    state: SessionState,
}

impl SurveyController {
    pub fn new(definition: SurveyDefinition) -> Self {
        Self {
            definition,
            state: SessionState::new(),
        }
    }

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn responses(&self) -> &Responses {
        self.state.responses()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn into_responses(self) -> Responses {
        self.state.into_responses()
    }

    /// Run one action through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(&self.definition, action);
    }

    pub fn go_to_previous(&mut self) {
        self.dispatch(Action::Previous);
    }

    pub fn go_to_next(&mut self) {
        self.dispatch(Action::Next);
    }

    pub fn record_feedback(&mut self, text: impl Into<String>) {
        self.dispatch(Action::RecordFeedback(text.into()));
    }

    pub fn record_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.dispatch(Action::RecordContactField {
            field,
            value: value.into(),
        });
    }

    pub fn submit(&mut self) {
        self.dispatch(Action::Submit);
    }

    /// Presentation data for the current step.
    ///
    /// `None` when there is nothing to show: the survey has no questions or
    /// it has been submitted.
    pub fn view(&self) -> Option<StepView<'_>> {
        if self.is_complete() {
            return None;
        }
        let last = self.definition.last_index()?;
        let index = self.current_index();
        let question = self.definition.question(index)?;
        let responses = self.responses();
        let value = if index == last {
            StepValue::Contact(responses.contact(question.id().as_str()))
        } else {
            StepValue::Feedback(responses.feedback(question.id().as_str()))
        };

        Some(StepView {
            index,
            total: last + 1,
            question,
            value,
        })
    }
}

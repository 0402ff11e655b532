//! # hogpulse
//!
//! A multi-step feedback survey. Backend-agnostic.
//!
//! Questions are shown one at a time. Every step but the last collects free
//! text feedback; the last step collects a name and an email. Navigation
//! cycles in both directions, and submitting the last step completes the
//! survey. Nothing is sent or stored anywhere: the responses live in the
//! session and are handed back to the caller.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hogpulse_ratatui::RatatuiBackend;
//!
//! let survey = hogpulse::load::default_survey();
//! let responses = hogpulse::run(&survey, RatatuiBackend::new())?;
//! ```
//!
//! ## Pieces
//!
//! - [`SurveyController`] - the step state machine, driven by [`Action`]s
//! - [`load`] - parsing the static question list
//! - [`run`] - runs any [`SurveyBackend`] and normalizes its errors
//!
//! ## Backends
//!
//! Backends implement `SurveyBackend`:
//! - `hogpulse-ratatui` - full-screen terminal UI
//! - [`TestBackend`] - scripted replay for tests

// Re-export all types from hogpulse-types
pub use hogpulse_types::*;

mod controller;
pub use controller::{Action, Phase, SessionState, StepValue, StepView, SurveyController};

pub mod load;
pub use load::LoadError;

// Test backend for running surveys without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};

/// Run a survey on the given backend.
///
/// A backend reporting cancellation maps to [`SurveyError::Cancelled`]; any
/// other failure is wrapped in [`SurveyError::Backend`].
pub fn run<B: SurveyBackend>(
    definition: &SurveyDefinition,
    backend: B,
) -> Result<Responses, SurveyError> {
    tracing::debug!(questions = definition.len(), "starting survey");
    backend.collect(definition).map_err(|err| {
        if B::is_cancellation(&err) {
            tracing::info!("survey cancelled");
            SurveyError::Cancelled
        } else {
            SurveyError::backend(err)
        }
    })
}

//! # hogpulse-ratatui
//!
//! Ratatui backend for hogpulse.
//!
//! This backend shows one survey step at a time in a full-screen terminal
//! UI: the question title, a feedback text area (or the name and email inputs
//! on the last step), a submit bar and a progress footer.
//!
//! ## Keys
//!
//! - Typing, Backspace, Delete, Left/Right, Home/End: edit the focused input
//! - Up/Down: cycle to the previous/next question
//! - Tab/Shift+Tab: switch between Name and Email on the contact step
//! - Enter: submit the step
//! - Alt+Enter: new line in a feedback answer
//! - Esc or Ctrl+C: leave the survey
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hogpulse_ratatui::RatatuiBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let survey = hogpulse::load::default_survey();
//!     let responses = hogpulse::run(&survey, RatatuiBackend::new())?;
//!     println!("{} answers", responses.len());
//!     Ok(())
//! }
//! ```

mod backend;
mod input;

pub use backend::{RatatuiBackend, RatatuiError, Theme};

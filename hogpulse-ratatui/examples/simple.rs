//! Two-step survey in the terminal.
//!
//! Run with: cargo run -p hogpulse-ratatui --example simple

use hogpulse::{Question, SurveyDefinition};
use hogpulse_ratatui::RatatuiBackend;

fn main() -> anyhow::Result<()> {
    let survey = SurveyDefinition::new(vec![
        Question::feedback("q1", "What did you think?"),
        Question::contact("q2", "Contact"),
    ])
    .with_prelude("HogPulse Live Feedback")
    .with_epilogue("Thanks for trying the demo.");

    let responses = hogpulse::run(&survey, RatatuiBackend::new())?;

    println!("\n=== Responses ===");
    println!("Feedback: {}", responses.feedback("q1"));
    let contact = responses.contact("q2");
    println!("Name: {}", contact.name);
    println!("Email: {}", contact.email);

    Ok(())
}

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use hogpulse::{SurveyDefinition, SurveyError, load};
use hogpulse_ratatui::RatatuiBackend;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "hogpulse")]
#[command(about = "Collect live feedback one question at a time")]
struct Cli {
    /// JSON file with the questions to ask, instead of the bundled set.
    #[arg(long, value_name = "PATH")]
    questions: Option<PathBuf>,

    /// Kicker shown above every question.
    #[arg(long)]
    title: Option<String>,

    /// Write logs to this file. Filter with RUST_LOG.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the collected responses as JSON after submitting.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

impl Cli {
    fn survey(&self) -> anyhow::Result<SurveyDefinition> {
        let survey = match &self.questions {
            Some(path) => SurveyDefinition::new(load::from_path(path)?)
                .with_prelude(load::DEFAULT_PRELUDE)
                .with_epilogue(load::DEFAULT_EPILOGUE),
            None => load::default_survey(),
        };
        Ok(match &self.title {
            Some(title) => survey.with_prelude(title),
            None => survey,
        })
    }
}

/// Logs go to a file only; the survey owns the terminal.
fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| {
            anyhow::anyhow!("failed to install logger for {}: {err}", path.display())
        })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let survey = cli.survey()?;
    tracing::info!(questions = survey.len(), "starting hogpulse");

    match hogpulse::run(&survey, RatatuiBackend::new()) {
        Ok(responses) => {
            if cli.summary {
                println!("{}", serde_json::to_string_pretty(&responses)?);
            }
            Ok(())
        }
        Err(SurveyError::Cancelled) => {
            println!("Survey cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bundled_questions() {
        let cli = Cli::try_parse_from(["hogpulse"]).unwrap();
        assert!(!cli.summary);

        let survey = cli.survey().unwrap();
        assert_eq!(survey.len(), load::bundled().len());
        assert_eq!(survey.prelude.as_deref(), Some(load::DEFAULT_PRELUDE));
    }

    #[test]
    fn title_flag_replaces_prelude() {
        let cli = Cli::try_parse_from(["hogpulse", "--title", "Beta Program", "--summary"]).unwrap();
        assert!(cli.summary);
        assert_eq!(
            cli.survey().unwrap().prelude.as_deref(),
            Some("Beta Program")
        );
    }

    #[test]
    fn second_logger_install_is_reported() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("hogpulse-{}-first.log", std::process::id()));
        let second = dir.join(format!("hogpulse-{}-second.log", std::process::id()));

        assert!(init_logging(None).is_ok());
        init_logging(Some(&first)).unwrap();
        let err = init_logging(Some(&second)).unwrap_err();
        assert!(err.to_string().contains("failed to install logger"));

        let _ = std::fs::remove_file(first);
        let _ = std::fs::remove_file(second);
    }

    #[test]
    fn missing_questions_file_is_an_error() {
        let cli =
            Cli::try_parse_from(["hogpulse", "--questions", "/no/such/questions.json"]).unwrap();
        let err = cli.survey().unwrap_err();
        assert!(err.to_string().contains("/no/such/questions.json"));
    }
}

//! Ratatui backend implementation for SurveyBackend trait.
//!
//! Presents one step at a time in a styled terminal UI with a progress
//! footer and keyboard navigation.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hogpulse::{
    ContactField, ContactInfo, Responses, StepValue, StepView, SurveyBackend, SurveyController,
    SurveyDefinition,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use thiserror::Error;
use tracing::{debug, info, warn};
use unicode_width::UnicodeWidthChar;

use crate::input::{EditorState, KeyOutcome, map_key};

const FEEDBACK_LABEL: &str = " Your feedback ";
const FEEDBACK_PLACEHOLDER: &str =
    "Tell us what stood out, what fell flat, or what you wish existed.";
const NAME_PLACEHOLDER: &str = "Ada Lovelace";
const EMAIL_PLACEHOLDER: &str = "ada@hogpulse.com";
const CONTACT_NOTE: &str = "We will only use this to follow up about the feature.";
const COMPLETION_TITLE: &str = "Thanks for the feedback!";
const COMPLETION_NOTE: &str = "You can close this survey or pass it along to someone else.";

/// Error type for the Ratatui backend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the survey (e.g., pressed Esc).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal cannot host the UI.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub accent: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            accent: Color::Magenta,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI backend.
///
/// Shows the current question with its input area, a submit bar and a
/// `Question i of n` footer. Up/Down cycle through the questions.
#[derive(Debug, Clone, Default)]
pub struct RatatuiBackend {
    /// Header kicker; falls back to the survey prelude when unset.
    title: Option<String>,
    /// Color theme for the UI.
    theme: Theme,
}

impl RatatuiBackend {
    /// Create a new Ratatui backend with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kicker shown above every question title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn kicker<'a>(&'a self, definition: &'a SurveyDefinition) -> Option<&'a str> {
        self.title.as_deref().or(definition.prelude.as_deref())
    }

    fn enter_terminal(&self) -> Result<TerminalGuard, RatatuiError> {
        if !io::stdout().is_terminal() {
            return Err(RatatuiError::Terminal(
                "stdout is not a terminal".to_string(),
            ));
        }
        enable_raw_mode()?;
        // From here on the guard undoes raw mode even if the rest fails.
        let guard = TerminalGuard::new(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        controller: &mut SurveyController,
    ) -> Result<(), RatatuiError> {
        let mut editor = EditorState::for_step(controller.view().as_ref());

        loop {
            terminal.draw(|frame| self.draw(frame, controller, &editor))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let outcome = map_key(key, &editor, controller.view().as_ref());
            match outcome {
                KeyOutcome::Edit { action, cursor } => {
                    controller.dispatch(action);
                    editor.cursor = cursor;
                }
                KeyOutcome::Navigate(action) => {
                    controller.dispatch(action);
                    editor = EditorState::for_step(controller.view().as_ref());
                }
                KeyOutcome::Cursor(cursor) => editor.cursor = cursor,
                KeyOutcome::Focus(field) => {
                    editor = editor.focus_on(field, controller.view().as_ref());
                }
                KeyOutcome::Cancel => {
                    info!(index = controller.current_index(), "survey cancelled");
                    return Err(RatatuiError::Cancelled);
                }
                KeyOutcome::Finish => return Ok(()),
                KeyOutcome::Ignore => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame, controller: &SurveyController, editor: &EditorState) {
        let definition = controller.definition();
        match controller.view() {
            Some(view) => draw_step(frame, &view, editor, self.kicker(definition), &self.theme),
            None => draw_completion(frame, definition.epilogue.as_deref(), &self.theme),
        }
    }
}

fn draw_step(
    frame: &mut Frame,
    view: &StepView<'_>,
    editor: &EditorState,
    kicker: Option<&str>,
    theme: &Theme,
) {
    let area = frame.area();

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(6),    // Answer area
            Constraint::Length(3), // Submit bar
            Constraint::Length(2), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], view, kicker, theme);

    match &view.value {
        StepValue::Feedback(text) => draw_feedback(frame, chunks[1], text, editor, theme),
        StepValue::Contact(contact) => draw_contact(frame, chunks[1], contact, editor, theme),
    }

    let submit = Paragraph::new("Submit")
        .style(Style::default().fg(theme.accent).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Enter ")
                .title_style(Style::default().fg(theme.muted)),
        );
    frame.render_widget(submit, chunks[2]);

    let (current, total) = view.progress();
    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    let position = Paragraph::new(format!("QUESTION {current} OF {total}"))
        .style(Style::default().fg(theme.muted));
    frame.render_widget(position, footer_chunks[0]);
    let hint_text = if view.is_contact_step() {
        "↑/↓ cycle · Tab switch field · Esc quit"
    } else {
        "↑/↓ cycle · Alt+⏎ newline · Esc quit"
    };
    let hint = Paragraph::new(hint_text)
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Right);
    frame.render_widget(hint, footer_chunks[1]);
}

fn draw_header(
    frame: &mut Frame,
    area: Rect,
    view: &StepView<'_>,
    kicker: Option<&str>,
    theme: &Theme,
) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(9)])
        .split(area);

    let mut lines = Vec::new();
    if let Some(kicker) = kicker {
        lines.push(Line::from(kicker.to_uppercase()).style(Style::default().fg(theme.muted)));
    }
    lines.push(
        Line::from(view.question.title().to_string())
            .style(Style::default().fg(theme.primary).bold()),
    );
    let title = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(title, header_chunks[0]);

    // Navigation markers, hidden at the ends like the page's buttons.
    let marker = |shown: bool, symbol: &'static str| {
        if shown {
            Span::styled(symbol, Style::default().fg(theme.highlight).bold())
        } else {
            Span::raw("   ")
        }
    };
    let nav = Paragraph::new(Line::from(vec![
        marker(view.shows_previous(), " < "),
        Span::raw(" "),
        marker(view.shows_next(), " > "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(nav, header_chunks[1]);
}

fn draw_feedback(frame: &mut Frame, area: Rect, text: &str, editor: &EditorState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(FEEDBACK_LABEL)
        .title_style(Style::default().fg(theme.highlight));
    let inner = block.inner(area);
    let width = usize::from(inner.width.max(1));
    let height = usize::from(inner.height.max(1));

    let wrapped = wrap_text(text, width, editor.cursor);
    let (row, col) = wrapped.cursor;
    let scroll = (row + 1).saturating_sub(height);

    let body = if text.is_empty() {
        Paragraph::new(FEEDBACK_PLACEHOLDER)
            .style(Style::default().fg(theme.muted))
            .wrap(Wrap { trim: true })
    } else {
        // Rows are pre-wrapped by display width so the cursor math stays exact.
        let lines: Vec<Line> = wrapped.rows.into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .style(Style::default().fg(theme.text))
            .scroll((scroll as u16, 0))
    };
    frame.render_widget(body.block(block), area);

    frame.set_cursor_position((inner.x + col as u16, inner.y + (row - scroll) as u16));
}

fn draw_contact(
    frame: &mut Frame,
    area: Rect,
    contact: &ContactInfo,
    editor: &EditorState,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    for (field, column) in ContactField::ALL.into_iter().zip(columns.iter()) {
        let focused = field == editor.focus;
        let border = if focused { theme.primary } else { theme.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", field.label()))
            .title_style(Style::default().fg(theme.highlight));
        let inner = block.inner(*column);

        let value = contact.field(field);
        let input = if value.is_empty() {
            let placeholder = match field {
                ContactField::Name => NAME_PLACEHOLDER,
                ContactField::Email => EMAIL_PLACEHOLDER,
            };
            Paragraph::new(placeholder).style(Style::default().fg(theme.muted))
        } else {
            Paragraph::new(value.to_string()).style(Style::default().fg(theme.text))
        };

        // Scroll horizontally so the cursor cell stays inside the field.
        let cursor = if focused { editor.cursor } else { 0 };
        let cursor_x = display_width(value.chars().take(cursor));
        let offset = cursor_x.saturating_sub(usize::from(inner.width.saturating_sub(1)));
        frame.render_widget(input.scroll((0, offset as u16)).block(block), *column);

        if focused {
            frame.set_cursor_position((inner.x + (cursor_x - offset) as u16, inner.y));
        }
    }

    let note = Paragraph::new(CONTACT_NOTE)
        .style(Style::default().fg(theme.muted))
        .wrap(Wrap { trim: true });
    frame.render_widget(note, rows[1]);
}

fn draw_completion(frame: &mut Frame, epilogue: Option<&str>, theme: &Theme) {
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Complete ")
        .title_style(Style::default().fg(theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(COMPLETION_TITLE).style(Style::default().fg(theme.primary).bold()),
        Line::default(),
    ];
    if let Some(epilogue) = epilogue {
        lines.push(Line::from(epilogue.to_string()).style(Style::default().fg(theme.text)));
    }
    lines.push(Line::from(COMPLETION_NOTE).style(Style::default().fg(theme.muted)));
    lines.push(Line::default());
    lines.push(Line::from("Press Enter to exit.").style(Style::default().fg(theme.muted)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(6),
            Constraint::Percentage(30),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

/// Puts the terminal back in cooked mode when dropped.
///
/// `restore` reports the outcome on the normal path; dropping the guard
/// without it (an early `?`) restores and only logs a failure.
struct TerminalGuard {
    restore_fn: fn() -> io::Result<()>,
    armed: bool,
}

impl TerminalGuard {
    fn new(restore_fn: fn() -> io::Result<()>) -> Self {
        Self {
            restore_fn,
            armed: true,
        }
    }

    fn restore(mut self) -> Result<(), RatatuiError> {
        self.armed = false;
        (self.restore_fn)().map_err(RatatuiError::from)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed
            && let Err(err) = (self.restore_fn)()
        {
            warn!(%err, "failed to restore terminal");
        }
    }
}

/// Combine the survey outcome with the terminal restore outcome. The
/// survey's own error wins; a restore failure alongside it is only logged.
fn settle(
    run: Result<(), RatatuiError>,
    restore: Result<(), RatatuiError>,
) -> Result<(), RatatuiError> {
    match (run, restore) {
        (Err(err), Err(restore_err)) => {
            warn!(%restore_err, "failed to restore terminal");
            Err(err)
        }
        (run, restore) => run.and(restore),
    }
}

fn display_width(chars: impl Iterator<Item = char>) -> usize {
    chars.map(|c| c.width().unwrap_or(0)).sum()
}

/// Text split into rows for a field of a given cell width.
#[derive(Debug, PartialEq)]
struct WrappedText {
    rows: Vec<String>,
    /// Row and cell column of the cursor.
    cursor: (usize, usize),
}

/// Split text into rows of at most `width` cells, breaking on newlines, and
/// locate the char-indexed `cursor` in the result.
fn wrap_text(text: &str, width: usize, cursor: usize) -> WrappedText {
    let width = width.max(1);
    let mut rows = vec![String::new()];
    let mut col = 0;
    let mut at_cursor = None;

    for (index, c) in text.chars().enumerate() {
        if c == '\n' {
            if index == cursor {
                at_cursor = Some((rows.len() - 1, col));
            }
            rows.push(String::new());
            col = 0;
            continue;
        }
        let cells = c.width().unwrap_or(0);
        if col > 0 && col + cells > width {
            rows.push(String::new());
            col = 0;
        }
        if index == cursor {
            at_cursor = Some((rows.len() - 1, col));
        }
        let last = rows.len() - 1;
        rows[last].push(c);
        col += cells;
    }

    let cursor = at_cursor.unwrap_or(if col >= width {
        (rows.len(), 0)
    } else {
        (rows.len() - 1, col)
    });
    WrappedText { rows, cursor }
}

impl SurveyBackend for RatatuiBackend {
    type Error = RatatuiError;

    fn collect(&self, definition: &SurveyDefinition) -> Result<Responses, Self::Error> {
        if definition.is_empty() {
            debug!("survey has no questions, nothing to show");
            return Ok(Responses::new());
        }

        let mut controller = SurveyController::new(definition.clone());
        let guard = self.enter_terminal()?;
        let result = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(RatatuiError::from)
            .and_then(|mut terminal| self.run_loop(&mut terminal, &mut controller));
        settle(result, guard.restore())?;

        info!(responses = controller.responses().len(), "survey finished");
        Ok(controller.into_responses())
    }

    fn is_cancellation(error: &Self::Error) -> bool {
        matches!(error, RatatuiError::Cancelled)
    }
}

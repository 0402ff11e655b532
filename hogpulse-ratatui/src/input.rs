//! Key handling for the survey screen.
//!
//! The controller owns the answers; this module only tracks where the user
//! is typing (focused contact field, cursor) and turns key presses into
//! controller actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hogpulse::{Action, ContactField, StepValue, StepView};

/// Terminal-side editing state. Rebuilt whenever the step changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EditorState {
    /// Which contact input receives keystrokes on the contact step.
    pub focus: ContactField,
    /// Cursor position in chars within the focused text.
    pub cursor: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            focus: ContactField::Name,
            cursor: 0,
        }
    }
}

impl EditorState {
    /// Fresh editor for a step: first contact field, cursor at the end.
    pub fn for_step(view: Option<&StepView<'_>>) -> Self {
        let mut editor = Self::default();
        if let Some(view) = view {
            editor.cursor = editor.focused_text(view).chars().count();
        }
        editor
    }

    /// Move focus to another contact field, cursor at the end of its text.
    pub fn focus_on(self, field: ContactField, view: Option<&StepView<'_>>) -> Self {
        let mut editor = Self {
            focus: field,
            cursor: 0,
        };
        if let Some(view) = view {
            editor.cursor = editor.focused_text(view).chars().count();
        }
        editor
    }

    /// The text of the input that currently receives keystrokes.
    pub fn focused_text(&self, view: &StepView<'_>) -> String {
        match &view.value {
            StepValue::Feedback(text) => (*text).to_string(),
            StepValue::Contact(contact) => contact.field(self.focus).to_string(),
        }
    }
}

/// What a key press means for the running survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    /// Text changed: record it and move the cursor.
    Edit { action: Action, cursor: usize },
    /// Step-level action; the editor is rebuilt afterwards.
    Navigate(Action),
    Cursor(usize),
    Focus(ContactField),
    Cancel,
    /// Leave the completion screen.
    Finish,
    Ignore,
}

/// Map a key press to its outcome. `view` is `None` once the survey is
/// complete.
pub(crate) fn map_key(
    key: KeyEvent,
    editor: &EditorState,
    view: Option<&StepView<'_>>,
) -> KeyOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Cancel;
    }

    let Some(view) = view else {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => KeyOutcome::Finish,
            _ => KeyOutcome::Ignore,
        };
    };

    let text = editor.focused_text(view);
    let len = text.chars().count();
    let cursor = editor.cursor.min(len);

    match key.code {
        KeyCode::Esc => KeyOutcome::Cancel,
        KeyCode::Enter
            if key.modifiers.contains(KeyModifiers::ALT) && !view.is_contact_step() =>
        {
            KeyOutcome::Edit {
                action: record(view, editor.focus, insert_char(&text, cursor, '\n')),
                cursor: cursor + 1,
            }
        }
        KeyCode::Enter => KeyOutcome::Navigate(Action::Submit),
        KeyCode::Up => KeyOutcome::Navigate(Action::Previous),
        KeyCode::Down => KeyOutcome::Navigate(Action::Next),
        KeyCode::Tab | KeyCode::BackTab if view.is_contact_step() => {
            KeyOutcome::Focus(editor.focus.other())
        }
        KeyCode::Left => KeyOutcome::Cursor(cursor.saturating_sub(1)),
        KeyCode::Right => KeyOutcome::Cursor((cursor + 1).min(len)),
        KeyCode::Home => KeyOutcome::Cursor(0),
        KeyCode::End => KeyOutcome::Cursor(len),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyOutcome::Edit {
                action: record(view, editor.focus, insert_char(&text, cursor, c)),
                cursor: cursor + 1,
            }
        }
        KeyCode::Backspace if cursor > 0 => KeyOutcome::Edit {
            action: record(view, editor.focus, remove_char(&text, cursor - 1)),
            cursor: cursor - 1,
        },
        KeyCode::Delete if cursor < len => KeyOutcome::Edit {
            action: record(view, editor.focus, remove_char(&text, cursor)),
            cursor,
        },
        _ => KeyOutcome::Ignore,
    }
}

fn record(view: &StepView<'_>, focus: ContactField, text: String) -> Action {
    if view.is_contact_step() {
        Action::RecordContactField {
            field: focus,
            value: text,
        }
    } else {
        Action::RecordFeedback(text)
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}

fn insert_char(text: &str, char_index: usize, c: char) -> String {
    let mut updated = text.to_string();
    updated.insert(byte_offset(text, char_index), c);
    updated
}

fn remove_char(text: &str, char_index: usize) -> String {
    let mut updated = text.to_string();
    let at = byte_offset(text, char_index);
    if at < updated.len() {
        updated.remove(at);
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use hogpulse::{Question, SurveyController, SurveyDefinition};
    use pretty_assertions::assert_eq;

    fn controller() -> SurveyController {
        SurveyController::new(SurveyDefinition::new(vec![
            Question::feedback("q1", "What did you think?"),
            Question::contact("q2", "Contact"),
        ]))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_records_feedback() {
        let mut controller = controller();
        controller.record_feedback("loved");
        let view = controller.view();
        let editor = EditorState::for_step(view.as_ref());
        assert_eq!(editor.cursor, 5);

        let outcome = map_key(press(KeyCode::Char('!')), &editor, view.as_ref());
        assert_eq!(
            outcome,
            KeyOutcome::Edit {
                action: Action::RecordFeedback("loved!".to_string()),
                cursor: 6,
            }
        );
    }

    #[test]
    fn editing_in_the_middle_of_multibyte_text() {
        let mut controller = controller();
        controller.record_feedback("héllo");
        let view = controller.view();
        let editor = EditorState {
            focus: ContactField::Name,
            cursor: 2,
        };

        assert_eq!(
            map_key(press(KeyCode::Backspace), &editor, view.as_ref()),
            KeyOutcome::Edit {
                action: Action::RecordFeedback("hllo".to_string()),
                cursor: 1,
            }
        );
        assert_eq!(
            map_key(press(KeyCode::Delete), &editor, view.as_ref()),
            KeyOutcome::Edit {
                action: Action::RecordFeedback("hélo".to_string()),
                cursor: 2,
            }
        );
        assert_eq!(
            map_key(press(KeyCode::Char('X')), &editor, view.as_ref()),
            KeyOutcome::Edit {
                action: Action::RecordFeedback("héXllo".to_string()),
                cursor: 3,
            }
        );
    }

    #[test]
    fn arrows_cycle_and_enter_submits() {
        let controller = controller();
        let view = controller.view();
        let editor = EditorState::for_step(view.as_ref());

        assert_eq!(
            map_key(press(KeyCode::Up), &editor, view.as_ref()),
            KeyOutcome::Navigate(Action::Previous)
        );
        assert_eq!(
            map_key(press(KeyCode::Down), &editor, view.as_ref()),
            KeyOutcome::Navigate(Action::Next)
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), &editor, view.as_ref()),
            KeyOutcome::Navigate(Action::Submit)
        );
    }

    #[test]
    fn contact_step_types_into_focused_field() {
        let mut controller = controller();
        controller.go_to_next();
        controller.record_contact_field(ContactField::Name, "Ada");
        let view = controller.view();
        let editor = EditorState::for_step(view.as_ref());
        assert_eq!(editor.focus, ContactField::Name);

        assert_eq!(
            map_key(press(KeyCode::Tab), &editor, view.as_ref()),
            KeyOutcome::Focus(ContactField::Email)
        );

        let editor = editor.focus_on(ContactField::Email, view.as_ref());
        assert_eq!(editor.cursor, 0);
        assert_eq!(
            map_key(press(KeyCode::Char('a')), &editor, view.as_ref()),
            KeyOutcome::Edit {
                action: Action::RecordContactField {
                    field: ContactField::Email,
                    value: "a".to_string(),
                },
                cursor: 1,
            }
        );
    }

    #[test]
    fn alt_enter_breaks_lines_in_feedback_only() {
        let mut controller = controller();
        controller.record_feedback("one");
        let view = controller.view();
        let editor = EditorState::for_step(view.as_ref());
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);

        assert_eq!(
            map_key(alt_enter, &editor, view.as_ref()),
            KeyOutcome::Edit {
                action: Action::RecordFeedback("one\n".to_string()),
                cursor: 4,
            }
        );

        controller.go_to_next();
        let view = controller.view();
        let editor = EditorState::for_step(view.as_ref());
        assert_eq!(
            map_key(alt_enter, &editor, view.as_ref()),
            KeyOutcome::Navigate(Action::Submit)
        );
    }

    #[test]
    fn tab_is_ignored_on_feedback_steps() {
        let controller = controller();
        let view = controller.view();
        let editor = EditorState::for_step(view.as_ref());
        assert_eq!(
            map_key(press(KeyCode::Tab), &editor, view.as_ref()),
            KeyOutcome::Ignore
        );
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut controller = controller();
        controller.record_feedback("ab");
        let view = controller.view();
        let editor = EditorState {
            focus: ContactField::Name,
            cursor: 2,
        };

        assert_eq!(
            map_key(press(KeyCode::Right), &editor, view.as_ref()),
            KeyOutcome::Cursor(2)
        );
        assert_eq!(
            map_key(press(KeyCode::Home), &editor, view.as_ref()),
            KeyOutcome::Cursor(0)
        );
        assert_eq!(
            map_key(press(KeyCode::Delete), &editor, view.as_ref()),
            KeyOutcome::Ignore
        );
    }

    #[test]
    fn cancel_and_finish() {
        let controller = controller();
        let view = controller.view();
        let editor = EditorState::for_step(view.as_ref());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(map_key(ctrl_c, &editor, view.as_ref()), KeyOutcome::Cancel);
        assert_eq!(
            map_key(press(KeyCode::Esc), &editor, view.as_ref()),
            KeyOutcome::Cancel
        );

        // Completion screen
        assert_eq!(
            map_key(press(KeyCode::Enter), &editor, None),
            KeyOutcome::Finish
        );
        assert_eq!(
            map_key(press(KeyCode::Char('x')), &editor, None),
            KeyOutcome::Ignore
        );
    }
}

//! # Prompts
//!
//! Blocking foreground prompts that take over the keyboard from the main
//! screen: delete confirmation, the add-todo and add-reminder text entries,
//! the time menu for a new reminder, and the help screen. While one is active
//! the app is in `AppMode::Input` and background refreshes are held off.

use crate::core::key::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    ConfirmDelete { todo_id: i64, content: String },
    AddTodo(LineEditor),
    AddReminderContent(LineEditor),
    AddReminderTime { content: String },
    Help,
}

impl Prompt {
    /// The one-line question shown in the status line.
    pub fn label(&self) -> &'static str {
        match self {
            Prompt::ConfirmDelete { .. } => "Delete current TODO. Are you sure? (yN) ",
            Prompt::AddTodo(_) => "Add TODO (Leave blank to cancel): ",
            Prompt::AddReminderContent(_) => "Add reminder (Leave blank to cancel): ",
            Prompt::AddReminderTime { .. } => "Remind me... ",
            Prompt::Help => "",
        }
    }

    pub fn editor(&self) -> Option<&LineEditor> {
        match self {
            Prompt::AddTodo(editor) | Prompt::AddReminderContent(editor) => Some(editor),
            _ => None,
        }
    }
}

/// Outcome of feeding a key to a [`LineEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    Editing,
    /// Enter on non-blank text. Carries the trimmed text.
    Submitted(String),
    /// Enter on blank text, or Esc.
    Cancelled,
}

/// Single-line text entry. `cursor` is a byte offset kept on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: Key) -> LineEdit {
        match key {
            Key::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            Key::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
            }
            Key::Left => self.cursor = prev_char_boundary(&self.buffer, self.cursor),
            Key::Right => self.cursor = next_char_boundary(&self.buffer, self.cursor),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.buffer.len(),
            Key::Enter => {
                let text = self.buffer.trim();
                return if text.is_empty() {
                    LineEdit::Cancelled
                } else {
                    LineEdit::Submitted(text.to_string())
                };
            }
            Key::Esc => return LineEdit::Cancelled,
            _ => {}
        }
        LineEdit::Editing
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut LineEditor, text: &str) {
        for c in text.chars() {
            assert_eq!(editor.handle_key(Key::Char(c)), LineEdit::Editing);
        }
    }

    #[test]
    fn test_typing_and_submit_trims() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "  buy milk ");
        assert_eq!(
            editor.handle_key(Key::Enter),
            LineEdit::Submitted("buy milk".to_string())
        );
    }

    #[test]
    fn test_blank_submit_cancels() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "   \t");
        assert_eq!(editor.handle_key(Key::Enter), LineEdit::Cancelled);
    }

    #[test]
    fn test_escape_cancels() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "draft");
        assert_eq!(editor.handle_key(Key::Esc), LineEdit::Cancelled);
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "café");
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.text(), "caf");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_cursor_movement_inserts_in_place() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "ac");
        editor.handle_key(Key::Left);
        editor.handle_key(Key::Char('b'));
        assert_eq!(editor.text(), "abc");

        editor.handle_key(Key::Home);
        editor.handle_key(Key::Delete);
        assert_eq!(editor.text(), "bc");

        editor.handle_key(Key::End);
        editor.handle_key(Key::Right);
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut editor = LineEditor::new();
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.text(), "");
        assert_eq!(editor.cursor(), 0);
    }
}

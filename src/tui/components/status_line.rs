//! # StatusLine Component
//!
//! Bottom line of the main screen. Shows the active prompt (question, typed
//! text and cursor) or, when nothing is being asked, a short key reminder.

use crate::core::prompt::Prompt;
use crate::core::time_choice::TimeChoice;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const IDLE_HINT: &str = "j/k move  Enter toggle  a add  d delete  r remind  Tab category  x quit";

pub struct StatusLine<'a> {
    pub prompt: Option<&'a Prompt>,
}

impl<'a> StatusLine<'a> {
    pub fn new(prompt: Option<&'a Prompt>) -> Self {
        Self { prompt }
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(prompt) = self.prompt else {
            let hint = Span::styled(IDLE_HINT, Style::default().fg(Color::DarkGray));
            frame.render_widget(Line::from(hint), area);
            return;
        };

        let label = Span::styled(
            prompt.label(),
            Style::default().add_modifier(Modifier::BOLD),
        );

        let line = match prompt {
            Prompt::AddReminderTime { .. } => {
                let mut spans = vec![label];
                for choice in TimeChoice::ALL {
                    spans.push(Span::styled(
                        format!("{}", choice.digit()),
                        Style::default().fg(Color::Cyan),
                    ));
                    spans.push(Span::raw(format!(") {}  ", choice.label())));
                }
                Line::from(spans)
            }
            _ => match prompt.editor() {
                Some(editor) => {
                    let before_cursor = &editor.text()[..editor.cursor()];
                    let x = area.x as usize + prompt.label().width() + before_cursor.width();
                    let x = x.min(area.right().saturating_sub(1) as usize) as u16;
                    frame.set_cursor_position(Position::new(x, area.y));
                    Line::from(vec![label, Span::raw(editor.text().to_string())])
                }
                None => Line::from(label),
            },
        };

        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::Key;
    use crate::core::prompt::LineEditor;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(prompt: Option<&Prompt>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|f| StatusLine::new(prompt).render(f, f.area()))
            .unwrap();
        terminal
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_idle_shows_hint() {
        let terminal = draw(None);
        assert!(text(&terminal).contains("x quit"));
    }

    #[test]
    fn test_confirm_delete_question() {
        let prompt = Prompt::ConfirmDelete {
            todo_id: 1,
            content: "dishes".to_string(),
        };
        let terminal = draw(Some(&prompt));
        assert!(text(&terminal).contains("Delete current TODO. Are you sure? (yN)"));
    }

    #[test]
    fn test_editor_text_and_cursor() {
        let mut editor = LineEditor::new();
        for c in "milk".chars() {
            editor.handle_key(Key::Char(c));
        }
        editor.handle_key(Key::Left);
        let prompt = Prompt::AddTodo(editor);

        let mut terminal = draw(Some(&prompt));
        assert!(text(&terminal).contains("Add TODO (Leave blank to cancel): milk"));

        let label_width = prompt.label().width() as u16;
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor, Position::new(label_width + 3, 0));
    }

    #[test]
    fn test_time_menu_lists_choices() {
        let prompt = Prompt::AddReminderTime {
            content: "stretch".to_string(),
        };
        let text = text(&draw(Some(&prompt)));
        assert!(text.contains("Remind me..."));
        assert!(text.contains("1) For an hour"));
        assert!(text.contains("3) Tomorrow EOD"));
    }
}

//! # TodoList Component
//!
//! The main screen: todos of the current category in server order, with the
//! cursor row highlighted. Long lists scroll so the cursor stays visible.

use crate::api::Todo;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

const FOOTER: &str = " Hit h for help. ";

pub struct TodoList<'a> {
    pub todos: &'a [Todo],
    pub selected: usize,
    pub category: Option<&'a str>,
}

impl<'a> TodoList<'a> {
    pub fn new(todos: &'a [Todo], selected: usize, category: Option<&'a str>) -> Self {
        Self {
            todos,
            selected,
            category,
        }
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {}: ", self.category.unwrap_or("")))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(FOOTER).centered())
            .padding(Padding::horizontal(1));

        if self.todos.is_empty() {
            let empty = Paragraph::new("Nothing to do.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .todos
            .iter()
            .map(|todo| {
                let (mark, style) = if todo.is_done {
                    (
                        "[x] ",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ] ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::raw(mark),
                    Span::styled(todo.content.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

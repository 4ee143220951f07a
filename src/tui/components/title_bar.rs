//! # TitleBar Component
//!
//! Top line: application name, the current category with its position among
//! all categories, and the last notice (errors, confirmations).
//!
//! Purely presentational. All data arrives as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(Some("Home".into()), (1, 3), None);
//! title_bar.render(frame, area);
//! ```
//!
//! The notice is drawn in yellow so a failed refresh stands out on a busy
//! screen. It disappears on the next keystroke.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Current category name, `None` before categories are loaded.
    pub category: Option<String>,
    /// One-based position and total, e.g. `(2, 5)`.
    pub position: (usize, usize),
    pub notice: Option<String>,
}

impl TitleBar {
    pub fn new(category: Option<String>, position: (usize, usize), notice: Option<String>) -> Self {
        Self {
            category,
            position,
            notice,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Manageme",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        match &self.category {
            Some(name) => {
                let (index, total) = self.position;
                spans.push(Span::raw(format!(" | {name}")));
                if total > 1 {
                    spans.push(Span::styled(
                        format!(" ({index}/{total})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            None => spans.push(Span::styled(
                " | no categories",
                Style::default().fg(Color::DarkGray),
            )),
        }

        if let Some(notice) = &self.notice {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(notice.clone(), Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

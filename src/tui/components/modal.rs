//! # Modal Frame
//!
//! Draws the chrome shared by every [`ModalWindow`]: clears what is underneath,
//! draws a bordered box with the title centered in the top border, and lays out
//! the button row along the bottom. The caller gets back the inner area left
//! for its own content.
//!
//! ```text
//! ┌──────────── R E M I N D E R ────────────┐
//! │ <content area returned to the caller>   │
//! │                                         │
//! │   [ Acknowledge ]  [ Snooze ]  [ ... ]  │
//! └─────────────────────────────────────────┘
//! ```

use crate::core::window::{Bounds, ModalWindow};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding};

pub fn to_rect(bounds: Bounds) -> Rect {
    Rect::new(bounds.x, bounds.y, bounds.width, bounds.height)
}

/// Render the window frame. Returns the content area above the buttons.
pub fn render_modal<A: Copy>(frame: &mut Frame, window: &ModalWindow<A>) -> Rect {
    let overlay = to_rect(window.bounds()).intersection(frame.area());

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Line::from(window.title().to_string()).centered())
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    if window.buttons().is_empty() {
        return inner;
    }

    let [content, buttons_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let mut spans = Vec::new();
    for (i, button) in window.buttons().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if i == window.selected_button() {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[ {} ]", button.label), style));
    }
    frame.render_widget(Line::from(spans).centered(), buttons_area);

    content
}

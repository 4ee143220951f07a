//! # HelpScreen Component
//!
//! Full-screen help text, shown verbatim. Any key returns to the list.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

pub struct HelpScreen<'a> {
    pub text: &'a str,
}

impl<'a> HelpScreen<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Component for HelpScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Help ")
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(self.text).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_help_text_rendered_verbatim() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| HelpScreen::new("j  down\nk  up").render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..40).map(|x| buffer[(x, y)].symbol()).collect() };
        assert!(row(0).contains("Help"));
        assert!(row(1).contains("j  down"));
        assert!(row(2).contains("k  up"));
    }
}

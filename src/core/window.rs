//! # Modal Windows
//!
//! A `ModalWindow` is the reusable frame behind every overlay: a title, a
//! rectangle, an ordered row of buttons and an open/closed flag. Opening and
//! closing only flips the flag, so one instance can be shown again and again.
//!
//! Buttons carry a plain value of the window's action type `A` instead of a
//! callback. When Enter is pressed the window hands that value back and the
//! owner decides what it means:
//!
//! ```text
//! key ──▶ ModalWindow::handle_key ──▶ Some(action) ──▶ owner matches on action
//! ```
//!
//! Specialised windows (see `popup`) wrap a `ModalWindow`, forward each key to
//! it first and then apply their own handling.

use crate::core::key::Key;
use crate::core::selection;

/// Something that consumes keys and may report a higher-level event.
pub trait KeyHandler {
    type Event;

    fn handle_key(&mut self, key: Key) -> Option<Self::Event>;
}

const POPUP_INSET_X: u16 = 5;
const POPUP_TOP: u16 = 2;
const POPUP_HEIGHT: u16 = 20;
const POPUP_MIN_WIDTH: u16 = 24;

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    /// Placement for an overlay on a `width` x `height` terminal: inset five
    /// columns on each side, two rows from the top, at most twenty rows tall.
    /// Small terminals get the whole screen.
    pub fn popup(width: u16, height: u16) -> Self {
        let (x, popup_width) = if width >= POPUP_MIN_WIDTH + 2 * POPUP_INSET_X {
            (POPUP_INSET_X, width - 2 * POPUP_INSET_X)
        } else {
            (0, width)
        };
        let y = if height > POPUP_HEIGHT + POPUP_TOP {
            POPUP_TOP
        } else {
            0
        };
        Self {
            x,
            y,
            width: popup_width,
            height: POPUP_HEIGHT.min(height - y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button<A> {
    pub label: &'static str,
    pub action: A,
}

impl<A> Button<A> {
    pub fn new(label: &'static str, action: A) -> Self {
        Self { label, action }
    }
}

#[derive(Debug, Clone)]
pub struct ModalWindow<A> {
    title: String,
    bounds: Bounds,
    is_open: bool,
    buttons: Vec<Button<A>>,
    selected_button: usize,
}

impl<A: Copy> ModalWindow<A> {
    pub fn new(buttons: Vec<Button<A>>) -> Self {
        Self {
            title: String::new(),
            bounds: Bounds::default(),
            is_open: false,
            buttons,
            selected_button: 0,
        }
    }

    pub fn open(&mut self, bounds: Bounds, title: impl Into<String>) {
        self.bounds = bounds;
        self.title = title.into();
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Track a terminal resize without reopening.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn buttons(&self) -> &[Button<A>] {
        &self.buttons
    }

    pub fn selected_button(&self) -> usize {
        self.selected_button
    }
}

impl<A: Copy> KeyHandler for ModalWindow<A> {
    type Event = A;

    fn handle_key(&mut self, key: Key) -> Option<A> {
        if self.buttons.is_empty() {
            return None;
        }
        match key {
            Key::Left | Key::Char('h') => {
                self.selected_button = selection::prev(self.selected_button, self.buttons.len());
                None
            }
            Key::Right | Key::Char('l') => {
                self.selected_button = selection::next(self.selected_button, self.buttons.len());
                None
            }
            Key::Enter => self.buttons.get(self.selected_button).map(|b| b.action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Choice {
        Yes,
        No,
        Later,
    }

    fn window() -> ModalWindow<Choice> {
        ModalWindow::new(vec![
            Button::new("Yes", Choice::Yes),
            Button::new("No", Choice::No),
            Button::new("Later", Choice::Later),
        ])
    }

    #[test]
    fn test_open_close_keeps_instance() {
        let mut w = window();
        assert!(!w.is_open());
        w.open(Bounds::popup(80, 24), " T I T L E ");
        assert!(w.is_open());
        assert_eq!(w.title(), " T I T L E ");
        w.close();
        assert!(!w.is_open());
        w.open(Bounds::popup(100, 40), "again");
        assert!(w.is_open());
        assert_eq!(w.bounds().width, 90);
    }

    #[test]
    fn test_button_selection_wraps() {
        let mut w = window();
        assert_eq!(w.handle_key(Key::Left), None);
        assert_eq!(w.selected_button(), 2);
        assert_eq!(w.handle_key(Key::Char('l')), None);
        assert_eq!(w.selected_button(), 0);
        w.handle_key(Key::Right);
        w.handle_key(Key::Char('l'));
        assert_eq!(w.selected_button(), 2);
        w.handle_key(Key::Char('h'));
        assert_eq!(w.selected_button(), 1);
    }

    #[test]
    fn test_enter_activates_selected_button() {
        let mut w = window();
        assert_eq!(w.handle_key(Key::Enter), Some(Choice::Yes));
        w.handle_key(Key::Right);
        assert_eq!(w.handle_key(Key::Enter), Some(Choice::No));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut w = window();
        assert_eq!(w.handle_key(Key::Char('a')), None);
        assert_eq!(w.handle_key(Key::Down), None);
        assert_eq!(w.selected_button(), 0);
    }

    #[test]
    fn test_no_buttons_is_noop() {
        let mut w: ModalWindow<Choice> = ModalWindow::new(Vec::new());
        assert_eq!(w.handle_key(Key::Left), None);
        assert_eq!(w.handle_key(Key::Enter), None);
        assert_eq!(w.selected_button(), 0);
    }

    #[test]
    fn test_popup_bounds() {
        assert_eq!(
            Bounds::popup(80, 30),
            Bounds {
                x: 5,
                y: 2,
                width: 70,
                height: 20
            }
        );
        // Too small for the inset: take the whole screen.
        assert_eq!(
            Bounds::popup(20, 10),
            Bounds {
                x: 0,
                y: 0,
                width: 20,
                height: 10
            }
        );
    }
}

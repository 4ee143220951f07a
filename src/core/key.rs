/// A key press, already stripped of terminal specifics.
///
/// The TUI adapter translates crossterm events into these; everything in
/// `core` works on `Key` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    BackTab,
}

impl Key {
    pub fn is_down(self) -> bool {
        matches!(self, Key::Down | Key::Char('j'))
    }

    pub fn is_up(self) -> bool {
        matches!(self, Key::Up | Key::Char('k'))
    }
}

//! # Reminder Popup
//!
//! Wraps a [`ModalWindow`] with the list of due reminders and a two-stage
//! state machine:
//!
//! ```text
//!            's' (with a selection)
//!   List ───────────────────────────▶ SnoozeMenu
//!    ▲                                    │
//!    └──── '1'..'4' → Snooze event ───────┤
//!    └──── any other key → no change ─────┘
//! ```
//!
//! The popup never talks to the service. It reports what the user asked for
//! (`PopupEvent`) and the controller calls back with [`ReminderPopup::remove`]
//! once the service has accepted the change. Whenever the list runs empty the
//! window closes itself.

use crate::api::Reminder;
use crate::core::key::Key;
use crate::core::selection;
use crate::core::time_choice::TimeChoice;
use crate::core::window::{Bounds, Button, KeyHandler, ModalWindow};

const TITLE: &str = " R E M I N D E R ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupButton {
    Acknowledge,
    Snooze,
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupStage {
    List,
    SnoozeMenu,
}

/// What the user asked the popup to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    Acknowledge(i64),
    Snooze { reminder_id: i64, choice: TimeChoice },
    Dismiss,
}

#[derive(Debug, Clone)]
pub struct ReminderPopup {
    window: ModalWindow<PopupButton>,
    reminders: Vec<Reminder>,
    selected: usize,
    stage: PopupStage,
}

impl Default for ReminderPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderPopup {
    pub fn new() -> Self {
        Self {
            window: ModalWindow::new(vec![
                Button::new("Acknowledge", PopupButton::Acknowledge),
                Button::new("Snooze", PopupButton::Snooze),
                Button::new("Dismiss", PopupButton::Dismiss),
            ]),
            reminders: Vec::new(),
            selected: 0,
            stage: PopupStage::List,
        }
    }

    pub fn window(&self) -> &ModalWindow<PopupButton> {
        &self.window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn stage(&self) -> PopupStage {
        self.stage
    }

    pub fn selected_reminder(&self) -> Option<&Reminder> {
        self.reminders.get(self.selected)
    }

    /// Swap in a freshly fetched batch. A non-empty batch (re)opens the window
    /// at `bounds`; an empty one closes it. The cursor survives unless it now
    /// points past the end.
    pub fn replace_reminders(&mut self, reminders: Vec<Reminder>, bounds: Bounds) {
        self.reminders = reminders;
        self.selected = selection::clamp_or_reset(self.selected, self.reminders.len());
        if self.reminders.is_empty() {
            self.stage = PopupStage::List;
            self.window.close();
        } else {
            self.window.open(bounds, TITLE);
        }
    }

    /// Drop a reminder the service has acknowledged or snoozed.
    pub fn remove(&mut self, reminder_id: i64) {
        let Some(position) = self.reminders.iter().position(|r| r.id == reminder_id) else {
            return;
        };
        self.reminders.remove(position);
        if position < self.selected {
            self.selected -= 1;
        }
        if self.selected >= self.reminders.len() {
            self.selected = selection::next(self.selected, self.reminders.len());
        }
        self.close_if_empty();
    }

    /// Leave the snooze menu, e.g. when focus moves away.
    pub fn reset_stage(&mut self) {
        self.stage = PopupStage::List;
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.window.set_bounds(bounds);
    }

    fn close_if_empty(&mut self) {
        if self.reminders.is_empty() {
            self.stage = PopupStage::List;
            self.window.close();
        }
    }

    fn acknowledge(&self) -> Option<PopupEvent> {
        self.selected_reminder()
            .map(|reminder| PopupEvent::Acknowledge(reminder.id))
    }

    fn start_snooze(&mut self) -> Option<PopupEvent> {
        if self.selected_reminder().is_some() {
            self.stage = PopupStage::SnoozeMenu;
        }
        None
    }

    fn handle_snooze_choice(&mut self, key: Key) -> Option<PopupEvent> {
        self.stage = PopupStage::List;
        let choice = TimeChoice::from_key(key)?;
        let reminder = self.selected_reminder()?;
        Some(PopupEvent::Snooze {
            reminder_id: reminder.id,
            choice,
        })
    }
}

impl KeyHandler for ReminderPopup {
    type Event = PopupEvent;

    fn handle_key(&mut self, key: Key) -> Option<PopupEvent> {
        // The snooze menu owns the very next key, whatever it is.
        if self.stage == PopupStage::SnoozeMenu {
            return self.handle_snooze_choice(key);
        }

        let event = match self.window.handle_key(key) {
            Some(PopupButton::Acknowledge) => self.acknowledge(),
            Some(PopupButton::Snooze) => self.start_snooze(),
            Some(PopupButton::Dismiss) => Some(PopupEvent::Dismiss),
            None => match key {
                k if k.is_down() => {
                    self.selected = selection::next(self.selected, self.reminders.len());
                    None
                }
                k if k.is_up() => {
                    self.selected = selection::prev(self.selected, self.reminders.len());
                    None
                }
                Key::Char('a') => self.acknowledge(),
                Key::Char('s') => self.start_snooze(),
                _ => None,
            },
        };

        self.close_if_empty();
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(id: i64, content: &str) -> Reminder {
        Reminder {
            id,
            category_id: 1,
            content: content.to_string(),
            due_time: None,
        }
    }

    fn open_popup(ids: &[i64]) -> ReminderPopup {
        let mut popup = ReminderPopup::new();
        popup.replace_reminders(
            ids.iter().map(|id| reminder(*id, &format!("r{id}"))).collect(),
            Bounds::popup(80, 24),
        );
        popup
    }

    #[test]
    fn test_starts_closed() {
        let popup = ReminderPopup::new();
        assert!(!popup.is_open());
        assert_eq!(popup.stage(), PopupStage::List);
    }

    #[test]
    fn test_replace_opens_and_closes() {
        let mut popup = open_popup(&[1, 2]);
        assert!(popup.is_open());
        assert_eq!(popup.window().title(), TITLE);

        popup.replace_reminders(Vec::new(), Bounds::popup(80, 24));
        assert!(!popup.is_open());
    }

    #[test]
    fn test_replace_keeps_cursor_in_range() {
        let mut popup = open_popup(&[1, 2, 3]);
        popup.handle_key(Key::Char('j'));
        assert_eq!(popup.selected(), 1);

        popup.replace_reminders(
            vec![reminder(1, "a"), reminder(2, "b"), reminder(4, "d")],
            Bounds::popup(80, 24),
        );
        assert_eq!(popup.selected(), 1);

        popup.replace_reminders(vec![reminder(9, "z")], Bounds::popup(80, 24));
        assert_eq!(popup.selected(), 0);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut popup = open_popup(&[1, 2, 3]);
        popup.handle_key(Key::Up);
        assert_eq!(popup.selected(), 2);
        popup.handle_key(Key::Down);
        assert_eq!(popup.selected(), 0);
        popup.handle_key(Key::Char('k'));
        assert_eq!(popup.selected(), 2);
    }

    #[test]
    fn test_acknowledge_reports_selected_id() {
        let mut popup = open_popup(&[10, 20]);
        popup.handle_key(Key::Char('j'));
        assert_eq!(popup.handle_key(Key::Char('a')), Some(PopupEvent::Acknowledge(20)));
        // Nothing is removed until the service confirms.
        assert_eq!(popup.reminders().len(), 2);
    }

    #[test]
    fn test_remove_last_selected_resets_cursor() {
        let mut popup = open_popup(&[10, 20]);
        popup.handle_key(Key::Char('j'));
        popup.remove(20);
        assert_eq!(popup.reminders().len(), 1);
        assert_eq!(popup.selected(), 0);
        assert!(popup.is_open());
    }

    #[test]
    fn test_remove_middle_keeps_cursor_position() {
        let mut popup = open_popup(&[1, 2, 3]);
        popup.handle_key(Key::Char('j'));
        popup.remove(2);
        assert_eq!(popup.selected(), 1);
        assert_eq!(popup.selected_reminder().map(|r| r.id), Some(3));
    }

    #[test]
    fn test_remove_only_reminder_closes() {
        let mut popup = open_popup(&[5]);
        popup.remove(5);
        assert!(popup.reminders().is_empty());
        assert!(!popup.is_open());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut popup = open_popup(&[1, 2]);
        popup.remove(99);
        assert_eq!(popup.reminders().len(), 2);
    }

    #[test]
    fn test_snooze_menu_flow() {
        let mut popup = open_popup(&[7, 8]);
        assert_eq!(popup.handle_key(Key::Char('s')), None);
        assert_eq!(popup.stage(), PopupStage::SnoozeMenu);

        let event = popup.handle_key(Key::Char('2'));
        assert_eq!(
            event,
            Some(PopupEvent::Snooze {
                reminder_id: 7,
                choice: TimeChoice::TomorrowMorning
            })
        );
        assert_eq!(popup.stage(), PopupStage::List);
    }

    #[test]
    fn test_unrecognized_snooze_key_aborts() {
        let mut popup = open_popup(&[7, 8]);
        popup.handle_key(Key::Char('j'));
        popup.handle_key(Key::Char('s'));
        // 'j' would normally navigate; inside the menu it only cancels.
        assert_eq!(popup.handle_key(Key::Char('j')), None);
        assert_eq!(popup.stage(), PopupStage::List);
        assert_eq!(popup.selected(), 1);
        assert_eq!(popup.reminders().len(), 2);
        assert!(popup.is_open());
    }

    #[test]
    fn test_buttons_drive_the_same_actions() {
        let mut popup = open_popup(&[3]);
        assert_eq!(popup.handle_key(Key::Enter), Some(PopupEvent::Acknowledge(3)));

        popup.handle_key(Key::Right);
        assert_eq!(popup.handle_key(Key::Enter), None);
        assert_eq!(popup.stage(), PopupStage::SnoozeMenu);
        popup.handle_key(Key::Esc);

        popup.handle_key(Key::Char('l'));
        assert_eq!(popup.handle_key(Key::Enter), Some(PopupEvent::Dismiss));
    }

    #[test]
    fn test_empty_list_actions_are_noops() {
        let mut popup = ReminderPopup::new();
        assert_eq!(popup.handle_key(Key::Char('a')), None);
        assert_eq!(popup.handle_key(Key::Char('s')), None);
        assert_eq!(popup.stage(), PopupStage::List);
        assert_eq!(popup.handle_key(Key::Char('j')), None);
        assert_eq!(popup.selected(), 0);
    }
}

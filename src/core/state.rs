//! # View State
//!
//! Everything the screen shows, in one place. Domain logic only: no ratatui,
//! no crossterm, no network.
//!
//! ```text
//! ViewState
//! ├── mode: AppMode                 // Running | Popup | Input(prompt) | Stopped
//! ├── categories: Vec<Category>     // as fetched
//! ├── current_category: Option<usize>
//! ├── todos: Vec<Todo>              // todos of the current category, server order
//! ├── selected: usize               // cursor into todos
//! ├── popup: ReminderPopup          // one instance, reused for every batch
//! ├── viewport: (u16, u16)          // terminal size, for popup placement
//! ├── notice: Option<String>        // one-line status, cleared on next key
//! └── help_text: String             // shown full-screen by 'h'
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::{Category, Todo};
use crate::core::popup::{PopupStage, ReminderPopup};
use crate::core::prompt::Prompt;
use crate::core::selection;
use crate::core::window::Bounds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the todo list.
    Running,
    /// The reminder popup has keyboard focus.
    Popup,
    /// A blocking prompt owns the keyboard.
    Input(Prompt),
    /// Terminal state. Background activities observe it and exit.
    Stopped,
}

pub struct ViewState {
    pub mode: AppMode,
    pub categories: Vec<Category>,
    pub current_category: Option<usize>,
    pub todos: Vec<Todo>,
    pub selected: usize,
    pub popup: ReminderPopup,
    pub viewport: (u16, u16),
    pub notice: Option<String>,
    pub help_text: String,
}

impl ViewState {
    pub fn new(help_text: String) -> Self {
        Self {
            mode: AppMode::Running,
            categories: Vec::new(),
            current_category: None,
            todos: Vec::new(),
            selected: 0,
            popup: ReminderPopup::new(),
            viewport: (80, 24),
            notice: None,
            help_text,
        }
    }

    pub fn category(&self) -> Option<&Category> {
        self.current_category.and_then(|i| self.categories.get(i))
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category().map(|c| c.id)
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.selected)
    }

    pub fn is_stopped(&self) -> bool {
        self.mode == AppMode::Stopped
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        match &self.mode {
            AppMode::Input(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// Whether a refresh may run now. Prompts, including the popup's snooze
    /// menu, must not have the data change underneath them.
    pub fn accepts_refresh(&self) -> bool {
        match self.mode {
            AppMode::Input(_) | AppMode::Stopped => false,
            AppMode::Popup => self.popup.stage() != PopupStage::SnoozeMenu,
            AppMode::Running => true,
        }
    }

    pub fn popup_bounds(&self) -> Bounds {
        Bounds::popup(self.viewport.0, self.viewport.1)
    }

    pub fn select_next(&mut self) {
        self.selected = selection::next(self.selected, self.todos.len());
    }

    pub fn select_prev(&mut self) {
        self.selected = selection::prev(self.selected, self.todos.len());
    }

    /// Replace the todo list, keeping the cursor if it is still in range.
    pub fn replace_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.selected = selection::clamp_or_reset(self.selected, self.todos.len());
    }

    /// Pick the first category when none is selected yet, or keep the
    /// current one if it is still in the list.
    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        let current_id = self.category_id();
        self.categories = categories;
        self.current_category = current_id
            .and_then(|id| self.categories.iter().position(|c| c.id == id))
            .or(if self.categories.is_empty() { None } else { Some(0) });
    }

    /// Cycle the current category. Returns true if it changed.
    pub fn cycle_category(&mut self, forward: bool) -> bool {
        let len = self.categories.len();
        let Some(current) = self.current_category else {
            return false;
        };
        if len < 2 {
            return false;
        }
        self.current_category = Some(if forward {
            selection::next(current, len)
        } else {
            selection::prev(current, len)
        });
        self.todos.clear();
        self.selected = 0;
        true
    }
}

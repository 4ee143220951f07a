//! # Actions
//!
//! Everything that can happen in the client becomes an `Action`.
//! User presses `j`? That's `Action::Key(Key::Char('j'))`.
//! The refresh ticker fires? That's `Action::RefreshTick`.
//! The service answers? That's `Action::Refreshed { .. }`.
//!
//! `update()` applies an action to the state and returns the single `Effect`
//! it needs performed. No I/O happens here; the controller runs the effect
//! and feeds the outcome back in as another action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use crate::api::{Category, Reminder, Todo};
use crate::core::key::Key;
use crate::core::popup::PopupEvent;
use crate::core::prompt::{LineEdit, LineEditor, Prompt};
use crate::core::state::{AppMode, ViewState};
use crate::core::time_choice::TimeChoice;
use crate::core::window::KeyHandler;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Key(Key),
    Resize {
        width: u16,
        height: u16,
    },
    /// Background refresh tick. May hand keyboard focus to the popup.
    RefreshTick,
    /// Refresh following a keystroke. Never moves focus.
    Refresh,
    CategoriesLoaded(Vec<Category>),
    Refreshed {
        todos: Vec<Todo>,
        reminders: Vec<Reminder>,
        claim_focus: bool,
    },
    /// The service accepted an acknowledge or snooze.
    ReminderResolved(i64),
    Notify(String),
    Failed {
        operation: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    LoadCategories,
    Refresh {
        category_id: Option<i64>,
        claim_focus: bool,
    },
    ToggleTodo(i64),
    DeleteTodo(i64),
    AddTodo {
        category_id: i64,
        content: String,
    },
    AddReminder {
        category_id: i64,
        content: String,
        choice: TimeChoice,
    },
    Acknowledge(i64),
    Snooze {
        reminder_id: i64,
        choice: TimeChoice,
    },
}

pub fn update(state: &mut ViewState, action: Action) -> Effect {
    match action {
        Action::Key(key) => {
            state.notice = None;
            handle_key(state, key)
        }
        Action::Resize { width, height } => {
            state.viewport = (width, height);
            if state.popup.is_open() {
                let bounds = state.popup_bounds();
                state.popup.resize(bounds);
            }
            Effect::None
        }
        Action::RefreshTick => request_refresh(state, true),
        Action::Refresh => request_refresh(state, false),
        Action::CategoriesLoaded(categories) => {
            state.replace_categories(categories);
            if state.accepts_refresh() {
                refresh(state, true)
            } else {
                Effect::None
            }
        }
        Action::Refreshed {
            todos,
            reminders,
            claim_focus,
        } => {
            apply_refresh(state, todos, reminders, claim_focus);
            Effect::None
        }
        Action::ReminderResolved(reminder_id) => {
            state.popup.remove(reminder_id);
            if state.mode == AppMode::Popup && !state.popup.is_open() {
                state.mode = AppMode::Running;
            }
            Effect::None
        }
        Action::Notify(message) => {
            state.notice = Some(message);
            Effect::None
        }
        Action::Failed { operation, message } => {
            state.notice = Some(format!("{operation} failed: {message}"));
            Effect::None
        }
    }
}

fn request_refresh(state: &ViewState, claim_focus: bool) -> Effect {
    if !state.accepts_refresh() {
        return Effect::None;
    }
    // The first load may have failed; retry it before fetching todos.
    if state.categories.is_empty() {
        return Effect::LoadCategories;
    }
    refresh(state, claim_focus)
}

fn refresh(state: &ViewState, claim_focus: bool) -> Effect {
    Effect::Refresh {
        category_id: state.category_id(),
        claim_focus,
    }
}

fn apply_refresh(
    state: &mut ViewState,
    todos: Vec<Todo>,
    reminders: Vec<Reminder>,
    claim_focus: bool,
) {
    state.replace_todos(todos);
    let bounds = state.popup_bounds();
    state.popup.replace_reminders(reminders, bounds);

    match state.mode {
        AppMode::Popup if !state.popup.is_open() => state.mode = AppMode::Running,
        AppMode::Running if claim_focus && state.popup.is_open() => state.mode = AppMode::Popup,
        _ => {}
    }
}

fn handle_key(state: &mut ViewState, key: Key) -> Effect {
    // Escape backs out of the popup or the main screen, but not out of a prompt:
    // prompts decide for themselves what Escape means.
    if key == Key::Esc && matches!(state.mode, AppMode::Running | AppMode::Popup) {
        state.popup.reset_stage();
        state.mode = AppMode::Running;
        return Effect::None;
    }

    match std::mem::replace(&mut state.mode, AppMode::Running) {
        AppMode::Stopped => {
            state.mode = AppMode::Stopped;
            Effect::None
        }
        AppMode::Popup => {
            state.mode = AppMode::Popup;
            handle_popup_key(state, key)
        }
        AppMode::Running => handle_main_key(state, key),
        AppMode::Input(prompt) => handle_prompt_key(state, prompt, key),
    }
}

fn handle_popup_key(state: &mut ViewState, key: Key) -> Effect {
    let effect = match state.popup.handle_key(key) {
        Some(PopupEvent::Acknowledge(reminder_id)) => Effect::Acknowledge(reminder_id),
        Some(PopupEvent::Snooze {
            reminder_id,
            choice,
        }) => Effect::Snooze {
            reminder_id,
            choice,
        },
        Some(PopupEvent::Dismiss) => {
            state.mode = AppMode::Running;
            Effect::None
        }
        None => Effect::None,
    };

    if !state.popup.is_open() {
        state.mode = AppMode::Running;
    }
    effect
}

fn handle_main_key(state: &mut ViewState, key: Key) -> Effect {
    match key {
        k if k.is_down() => state.select_next(),
        k if k.is_up() => state.select_prev(),
        Key::Enter | Key::Char(' ') => {
            if let Some(todo) = state.selected_todo() {
                return Effect::ToggleTodo(todo.id);
            }
        }
        Key::Char('d') => {
            if let Some(todo) = state.selected_todo() {
                state.mode = AppMode::Input(Prompt::ConfirmDelete {
                    todo_id: todo.id,
                    content: todo.content.clone(),
                });
            }
        }
        Key::Char('a') => open_text_prompt(state, Prompt::AddTodo(LineEditor::new())),
        Key::Char('r') => open_text_prompt(state, Prompt::AddReminderContent(LineEditor::new())),
        Key::Char('h') => state.mode = AppMode::Input(Prompt::Help),
        Key::Char('x') => {
            state.mode = AppMode::Stopped;
            return Effect::Quit;
        }
        Key::Tab => {
            state.cycle_category(true);
        }
        Key::BackTab => {
            state.cycle_category(false);
        }
        _ => {}
    }
    Effect::None
}

fn open_text_prompt(state: &mut ViewState, prompt: Prompt) {
    if state.category().is_some() {
        state.mode = AppMode::Input(prompt);
    } else {
        state.notice = Some("No category to add to".to_string());
    }
}

/// Runs with `state.mode` already reset to `Running`; only prompts that stay
/// open put themselves back.
fn handle_prompt_key(state: &mut ViewState, prompt: Prompt, key: Key) -> Effect {
    match prompt {
        Prompt::ConfirmDelete { todo_id, .. } => match key {
            Key::Char('y') | Key::Char('Y') => Effect::DeleteTodo(todo_id),
            _ => Effect::None,
        },
        Prompt::AddTodo(mut editor) => match editor.handle_key(key) {
            LineEdit::Editing => {
                state.mode = AppMode::Input(Prompt::AddTodo(editor));
                Effect::None
            }
            LineEdit::Cancelled => Effect::None,
            LineEdit::Submitted(content) => match state.category_id() {
                Some(category_id) => Effect::AddTodo {
                    category_id,
                    content,
                },
                None => Effect::None,
            },
        },
        Prompt::AddReminderContent(mut editor) => match editor.handle_key(key) {
            LineEdit::Editing => {
                state.mode = AppMode::Input(Prompt::AddReminderContent(editor));
                Effect::None
            }
            LineEdit::Cancelled => Effect::None,
            LineEdit::Submitted(content) => {
                state.mode = AppMode::Input(Prompt::AddReminderTime { content });
                Effect::None
            }
        },
        Prompt::AddReminderTime { content } => {
            match (TimeChoice::from_key(key), state.category_id()) {
                (Some(choice), Some(category_id)) => Effect::AddReminder {
                    category_id,
                    content,
                    choice,
                },
                _ => Effect::None,
            }
        }
        Prompt::Help => Effect::None,
    }
}

//! # Controller
//!
//! Owns the [`ViewState`] and the [`RemoteClient`] and is the only place where
//! an [`Effect`] turns into a network call. Each call's outcome is fed back
//! through `update()` as a new [`Action`], until nothing is left to do:
//!
//! ```text
//! dispatch(action)
//!   └─▶ update(state, action) ─▶ effect ─▶ execute(effect) ─▶ Some(action) ─┐
//!         ▲                                                                 │
//!         └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller is driven by a single owner (the event loop), so state
//! mutation and remote calls are serialized without any locking.

use std::sync::Arc;

use chrono::Local;
use log::{debug, info, warn};

use crate::api::{ClientError, RemoteClient};
use crate::core::action::{Action, Effect, update};
use crate::core::state::ViewState;

pub struct AppController {
    client: Arc<dyn RemoteClient>,
    state: ViewState,
}

impl AppController {
    pub fn new(client: Arc<dyn RemoteClient>, help_text: String) -> Self {
        Self {
            client,
            state: ViewState::new(help_text),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state.is_stopped()
    }

    /// First load after login: categories, then todos and due reminders.
    pub async fn bootstrap(&mut self) {
        self.run(Effect::LoadCategories).await;
    }

    /// Apply one action and run every effect that follows from it.
    pub async fn dispatch(&mut self, action: Action) {
        let effect = update(&mut self.state, action);
        self.run(effect).await;
    }

    async fn run(&mut self, mut effect: Effect) {
        while let Some(action) = self.execute(effect).await {
            effect = update(&mut self.state, action);
        }
    }

    async fn execute(&self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::None => None,
            Effect::Quit => {
                info!("Quit requested");
                None
            }
            Effect::LoadCategories => Some(match self.client.list_categories().await {
                Ok(categories) => {
                    debug!("Loaded {} categories", categories.len());
                    Action::CategoriesLoaded(categories)
                }
                Err(e) => failed("load categories", e),
            }),
            Effect::Refresh {
                category_id,
                claim_focus,
            } => Some(self.refresh(category_id, claim_focus).await),
            // Todo changes show up with the refresh that follows every keystroke.
            Effect::ToggleTodo(todo_id) => match self.client.toggle_todo_done(todo_id).await {
                Ok(()) => None,
                Err(e) => Some(failed("toggle todo", e)),
            },
            Effect::DeleteTodo(todo_id) => match self.client.delete_todo(todo_id).await {
                Ok(()) => {
                    info!("Deleted todo {todo_id}");
                    None
                }
                Err(e) => Some(failed("delete todo", e)),
            },
            Effect::AddTodo {
                category_id,
                content,
            } => match self.client.add_todo(category_id, &content).await {
                Ok(todo) => {
                    info!("Added todo {} to category {category_id}", todo.id);
                    None
                }
                Err(e) => Some(failed("add todo", e)),
            },
            Effect::AddReminder {
                category_id,
                content,
                choice,
            } => {
                let time = choice.resolve(&Local::now());
                Some(
                    match self.client.add_reminder(category_id, &content, time).await {
                        Ok(reminder) => {
                            info!("Added reminder {} due {time}", reminder.id);
                            Action::Notify(format!("Reminder set: {}", choice.label()))
                        }
                        Err(e) => failed("add reminder", e),
                    },
                )
            }
            Effect::Acknowledge(reminder_id) => Some(
                match self.client.acknowledge_reminder(reminder_id).await {
                    Ok(()) => Action::ReminderResolved(reminder_id),
                    Err(e) => failed("acknowledge reminder", e),
                },
            ),
            Effect::Snooze {
                reminder_id,
                choice,
            } => {
                let until = choice.resolve(&Local::now());
                Some(match self.client.snooze_reminder(reminder_id, until).await {
                    Ok(()) => {
                        debug!("Snoozed reminder {reminder_id} until {until}");
                        Action::ReminderResolved(reminder_id)
                    }
                    Err(e) => failed("snooze reminder", e),
                })
            }
        }
    }

    async fn refresh(&self, category_id: Option<i64>, claim_focus: bool) -> Action {
        let todos = match category_id {
            Some(id) => match self.client.list_todos(id).await {
                Ok(todos) => todos,
                Err(e) => return failed("refresh", e),
            },
            None => Vec::new(),
        };
        match self.client.list_reminders().await {
            Ok(reminders) => Action::Refreshed {
                todos,
                reminders,
                claim_focus,
            },
            Err(e) => failed("refresh", e),
        }
    }
}

fn failed(operation: &'static str, error: ClientError) -> Action {
    warn!("{operation} failed: {error}");
    Action::Failed {
        operation,
        message: error.to_string(),
    }
}

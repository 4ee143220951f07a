//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::{
    Category, ClientError, Credentials, RemoteClient, Reminder, Session, Todo,
};

/// One call made against a [`FakeClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    ListCategories,
    ListTodos(i64),
    AddTodo(i64, String),
    ToggleTodo(i64),
    DeleteTodo(i64),
    ListReminders,
    Acknowledge(i64),
    Snooze(i64, DateTime<Utc>),
    AddReminder(i64, String, DateTime<Utc>),
}

/// In-memory service that records every call. Reminders stay "due" until
/// acknowledged or snoozed.
#[derive(Default)]
pub struct FakeClient {
    categories: Mutex<Vec<Category>>,
    todos: Mutex<HashMap<i64, Vec<Todo>>>,
    reminders: Mutex<Vec<Reminder>>,
    calls: Mutex<Vec<Call>>,
    failure: Mutex<Option<String>>,
    next_id: Mutex<i64>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(100),
            ..Default::default()
        }
    }

    pub fn with_category(self, id: i64, name: &str, todos: &[&str]) -> Self {
        self.categories.lock().unwrap().push(Category {
            id,
            name: name.to_string(),
        });
        let list = todos
            .iter()
            .enumerate()
            .map(|(i, content)| Todo {
                id: id * 10 + i as i64 + 1,
                category_id: id,
                content: content.to_string(),
                is_done: false,
            })
            .collect();
        self.todos.lock().unwrap().insert(id, list);
        self
    }

    pub fn with_reminder(self, id: i64, content: &str) -> Self {
        self.reminders.lock().unwrap().push(Reminder {
            id,
            category_id: 1,
            content: content.to_string(),
            due_time: None,
        });
        self
    }

    /// Make every following call fail with `cause`, or succeed again with `None`.
    pub fn fail_with(&self, cause: Option<&str>) {
        *self.failure.lock().unwrap() = cause.map(str::to_string);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn todos(&self, category_id: i64) -> Vec<Todo> {
        self.todos
            .lock()
            .unwrap()
            .get(&category_id)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: Call, verb: &'static str) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(cause) => Err(ClientError::Remote {
                verb,
                url: "http://fake/".to_string(),
                cause,
            }),
            None => Ok(()),
        }
    }

    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

#[async_trait]
impl RemoteClient for FakeClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        self.record(Call::Login(credentials.name.clone()), "POST")
            .map_err(|e| ClientError::LoginFailed(e.to_string()))?;
        Ok(Session {
            token: "fake-token".to_string(),
        })
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.record(Call::ListCategories, "GET")?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn list_todos(&self, category_id: i64) -> Result<Vec<Todo>, ClientError> {
        self.record(Call::ListTodos(category_id), "GET")?;
        Ok(self.todos(category_id))
    }

    async fn add_todo(&self, category_id: i64, content: &str) -> Result<Todo, ClientError> {
        self.record(Call::AddTodo(category_id, content.to_string()), "POST")?;
        let todo = Todo {
            id: self.allocate_id(),
            category_id,
            content: content.to_string(),
            is_done: false,
        };
        self.todos
            .lock()
            .unwrap()
            .entry(category_id)
            .or_default()
            .push(todo.clone());
        Ok(todo)
    }

    async fn toggle_todo_done(&self, todo_id: i64) -> Result<(), ClientError> {
        self.record(Call::ToggleTodo(todo_id), "PUT")?;
        for todo in self.todos.lock().unwrap().values_mut().flatten() {
            if todo.id == todo_id {
                todo.is_done = !todo.is_done;
            }
        }
        Ok(())
    }

    async fn delete_todo(&self, todo_id: i64) -> Result<(), ClientError> {
        self.record(Call::DeleteTodo(todo_id), "DELETE")?;
        for list in self.todos.lock().unwrap().values_mut() {
            list.retain(|t| t.id != todo_id);
        }
        Ok(())
    }

    async fn list_reminders(&self) -> Result<Vec<Reminder>, ClientError> {
        self.record(Call::ListReminders, "GET")?;
        Ok(self.reminders.lock().unwrap().clone())
    }

    async fn acknowledge_reminder(&self, reminder_id: i64) -> Result<(), ClientError> {
        self.record(Call::Acknowledge(reminder_id), "POST")?;
        self.reminders.lock().unwrap().retain(|r| r.id != reminder_id);
        Ok(())
    }

    async fn snooze_reminder(
        &self,
        reminder_id: i64,
        until: DateTime<Utc>,
    ) -> Result<(), ClientError> {
        self.record(Call::Snooze(reminder_id, until), "POST")?;
        self.reminders.lock().unwrap().retain(|r| r.id != reminder_id);
        Ok(())
    }

    async fn add_reminder(
        &self,
        category_id: i64,
        content: &str,
        time: DateTime<Utc>,
    ) -> Result<Reminder, ClientError> {
        self.record(
            Call::AddReminder(category_id, content.to_string(), time),
            "POST",
        )?;
        Ok(Reminder {
            id: self.allocate_id(),
            category_id,
            content: content.to_string(),
            due_time: Some(time),
        })
    }
}

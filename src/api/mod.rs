//! # Remote Service Boundary
//!
//! Everything the client knows about the Manageme service goes through the
//! [`RemoteClient`] trait. The core only ever sees this trait, so tests can swap
//! in a recording fake and the real HTTP implementation stays a thin wrapper.

pub mod client;
pub mod types;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use client::HttpClient;
pub use types::{Category, Credentials, Reminder, Session, Todo};

/// Errors raised by a [`RemoteClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// An authenticated call was made before a successful login.
    NotLoggedIn,
    /// The login request itself failed.
    LoginFailed(String),
    /// Transport failure, non-success status, or an undecodable body.
    Remote {
        verb: &'static str,
        url: String,
        cause: String,
    },
}

impl ClientError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, ClientError::NotLoggedIn | ClientError::LoginFailed(_))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NotLoggedIn => write!(f, "not logged in"),
            ClientError::LoginFailed(cause) => write!(f, "login failed: {cause}"),
            ClientError::Remote { verb, url, cause } => {
                write!(f, "cannot {verb} `{url}`: {cause}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Authenticates and stores the session for every later call.
    async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;

    async fn list_todos(&self, category_id: i64) -> Result<Vec<Todo>, ClientError>;

    async fn add_todo(&self, category_id: i64, content: &str) -> Result<Todo, ClientError>;

    async fn toggle_todo_done(&self, todo_id: i64) -> Result<(), ClientError>;

    async fn delete_todo(&self, todo_id: i64) -> Result<(), ClientError>;

    /// Due reminders across all categories.
    async fn list_reminders(&self) -> Result<Vec<Reminder>, ClientError>;

    async fn acknowledge_reminder(&self, reminder_id: i64) -> Result<(), ClientError>;

    async fn snooze_reminder(
        &self,
        reminder_id: i64,
        until: DateTime<Utc>,
    ) -> Result<(), ClientError>;

    async fn add_reminder(
        &self,
        category_id: i64,
        content: &str,
        time: DateTime<Utc>,
    ) -> Result<Reminder, ClientError>;
}

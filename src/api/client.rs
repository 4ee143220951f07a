//! HTTP implementation of [`RemoteClient`] on top of reqwest.
//!
//! The session token from `login` is kept behind a lock and attached as a
//! bearer header to every later request. Calls made before login fail with
//! [`ClientError::NotLoggedIn`] without touching the network.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{self, Credentials, ReminderForm, SnoozeForm, TodoForm};
use super::{Category, ClientError, Reminder, RemoteClient, Session, Todo};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/";

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn name(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// A successful response body, still tagged with where it came from so
/// decode failures can name the request.
struct Response {
    verb: Verb,
    url: String,
    body: String,
}

impl Response {
    fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        types::decode(&self.body).map_err(|e| ClientError::Remote {
            verb: self.verb.name(),
            url: self.url.clone(),
            cause: format!("invalid response body: {e}"),
        })
    }
}

pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
    session: RwLock<Option<Session>>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            session: RwLock::new(None),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session
            .read()
            .map(|session| session.is_some())
            .unwrap_or(false)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn token(&self) -> Result<String, ClientError> {
        let session = self
            .session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        session
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(ClientError::NotLoggedIn)
    }

    /// Sends an authenticated request.
    async fn call(
        &self,
        verb: Verb,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ClientError> {
        let token = self.token()?;
        self.send(verb, path, body, Some(token)).await
    }

    async fn send(
        &self,
        verb: Verb,
        path: &str,
        body: Option<Value>,
        token: Option<String>,
    ) -> Result<Response, ClientError> {
        let url = self.url(path);
        let remote = |cause: String| ClientError::Remote {
            verb: verb.name(),
            url: url.clone(),
            cause,
        };

        let mut request = self.client.request(verb.method(), &url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        debug!("{} {}", verb.name(), url);
        let response = request.send().await.map_err(|e| remote(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let err_body = response.text().await.unwrap_or_default();
            warn!("{} {} returned {}: {}", verb.name(), url, status, err_body);
            return Err(remote(format!("unsuccessful response: HTTP {}", status.as_u16())));
        }

        let body = response.text().await.map_err(|e| remote(e.to_string()))?;
        Ok(Response { verb, url, body })
    }
}

fn to_body<T: serde::Serialize>(form: &T) -> Option<Value> {
    // Forms are plain structs of strings, numbers and timestamps.
    serde_json::to_value(form).ok()
}

#[async_trait]
impl RemoteClient for HttpClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        let response = self
            .send(Verb::Post, "login", to_body(credentials), None)
            .await
            .map_err(|e| ClientError::LoginFailed(e.to_string()))?;
        let session: Session = response
            .decode()
            .map_err(|e| ClientError::LoginFailed(e.to_string()))?;

        info!("Logged in as {}", credentials.name);
        let mut slot = self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(session.clone());
        Ok(session)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.call(Verb::Get, "category", None).await?.decode()
    }

    async fn list_todos(&self, category_id: i64) -> Result<Vec<Todo>, ClientError> {
        self.call(Verb::Get, &format!("todo/{category_id}"), None)
            .await?
            .decode()
    }

    async fn add_todo(&self, category_id: i64, content: &str) -> Result<Todo, ClientError> {
        let form = TodoForm {
            category_id,
            content,
        };
        self.call(Verb::Post, "todo", to_body(&form)).await?.decode()
    }

    async fn toggle_todo_done(&self, todo_id: i64) -> Result<(), ClientError> {
        self.call(
            Verb::Put,
            &format!("todo/{todo_id}"),
            Some(Value::Object(Default::default())),
        )
        .await?;
        Ok(())
    }

    async fn delete_todo(&self, todo_id: i64) -> Result<(), ClientError> {
        self.call(Verb::Delete, &format!("todo/{todo_id}"), None)
            .await?;
        Ok(())
    }

    async fn list_reminders(&self) -> Result<Vec<Reminder>, ClientError> {
        self.call(Verb::Get, "reminder", None).await?.decode()
    }

    async fn acknowledge_reminder(&self, reminder_id: i64) -> Result<(), ClientError> {
        self.call(
            Verb::Post,
            &format!("reminder/{reminder_id}/acknowledge"),
            None,
        )
        .await?;
        Ok(())
    }

    async fn snooze_reminder(
        &self,
        reminder_id: i64,
        until: DateTime<Utc>,
    ) -> Result<(), ClientError> {
        let form = SnoozeForm {
            id: reminder_id,
            time: until,
        };
        self.call(Verb::Post, "reminder/snooze", to_body(&form))
            .await?;
        Ok(())
    }

    async fn add_reminder(
        &self,
        category_id: i64,
        content: &str,
        time: DateTime<Utc>,
    ) -> Result<Reminder, ClientError> {
        let form = ReminderForm {
            category_id,
            content,
            time,
        };
        self.call(Verb::Post, "reminder", to_body(&form))
            .await?
            .decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_with_single_slash() {
        let with_slash = HttpClient::new("http://localhost:5000/api/");
        let without = HttpClient::new("http://localhost:5000/api");
        assert_eq!(with_slash.url("todo/3"), "http://localhost:5000/api/todo/3");
        assert_eq!(without.url("todo/3"), "http://localhost:5000/api/todo/3");
    }

    #[test]
    fn test_new_client_is_not_logged_in() {
        let client = HttpClient::new(DEFAULT_BASE_URL);
        assert!(!client.is_logged_in());
        assert_eq!(client.token(), Err(ClientError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_calls_before_login_fail_without_network() {
        // Port 9 (discard) would fail with a transport error if we got that far.
        let client = HttpClient::new("http://127.0.0.1:9/api");
        assert_eq!(client.list_reminders().await, Err(ClientError::NotLoggedIn));
        assert_eq!(client.delete_todo(1).await, Err(ClientError::NotLoggedIn));
    }
}

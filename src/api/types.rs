//! Wire types for the Manageme REST API.
//!
//! Request bodies serialize as camelCase. Responses are decoded through
//! [`decode`], which folds every object key to lowercase with `_`/`-` removed
//! before handing the value to serde, so `CategoryId`, `categoryId` and
//! `category_id` all land in the same field.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    #[serde(alias = "categoryid")]
    pub category_id: i64,
    pub content: String,
    #[serde(alias = "isdone", default)]
    pub is_done: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    #[serde(alias = "categoryid")]
    pub category_id: i64,
    pub content: String,
    /// When the reminder fell due. The service calls this field `time`.
    #[serde(rename = "time", default, deserialize_with = "lenient_time")]
    pub due_time: Option<DateTime<Utc>>,
}

/// Login form. Sent as-is to `POST login`.
#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Bearer token handed out by `POST login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TodoForm<'a> {
    pub category_id: i64,
    pub content: &'a str,
}

#[derive(Serialize, Debug)]
pub(crate) struct SnoozeForm {
    pub id: i64,
    pub time: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReminderForm<'a> {
    pub category_id: i64,
    pub content: &'a str,
    pub time: DateTime<Utc>,
}

/// Decode a JSON body with case-insensitive field matching.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    serde_json::from_value(fold_keys(value))
}

fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (fold_key(&key), fold_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accepts RFC 3339 timestamps as well as offset-less ones, which are taken as UTC.
fn lenient_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(serde::de::Error::custom)
}

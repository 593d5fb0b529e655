//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Ids are server-assigned and opaque to the client. The server
//! emits integer ids, so `TodoId` accepts either a JSON number or a JSON
//! string and always holds the textual form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct TodoId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for TodoId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => TodoId(s),
            RawId::Number(n) => TodoId(n.to_string()),
        }
    }
}

impl TodoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId(s)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub content: String,
    pub checked: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    pub content: String,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl UpdateTodo {
    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_integer() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":3,"title":"t","content":"c","checked":false}"#).unwrap();
        assert_eq!(item.id.as_str(), "3");
    }

    #[test]
    fn id_accepts_string() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":"abc-1","title":"t","content":"c","checked":true}"#)
                .unwrap();
        assert_eq!(item.id, TodoId::from("abc-1"));
        assert!(item.checked);
    }

    #[test]
    fn id_rejects_other_json() {
        let result: Result<TodoItem, _> =
            serde_json::from_str(r#"{"id":true,"title":"t","content":"c","checked":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_serializes_title_then_content() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
            content: "2%".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"title":"Buy milk","content":"2%"}"#
        );
    }

    #[test]
    fn update_omits_absent_fields() {
        let json = serde_json::to_string(&UpdateTodo::checked(true)).unwrap();
        assert_eq!(json, r#"{"checked":true}"#);
    }
}

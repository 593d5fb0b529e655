//! In-memory implementation of the `/api/todo/` contract.
//!
//! Ids are integers handed out by an incrementing counter, starting at 1.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: usize,
    pub title: String,
    pub content: String,
    pub checked: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub content: Option<String>,
    pub checked: Option<bool>,
}

#[derive(Debug, Default)]
pub struct TodoStore {
    current_index: usize,
    items: BTreeMap<usize, Todo>,
}

impl TodoStore {
    /// The two demo items the page shows on first run.
    pub fn seeded() -> Self {
        let mut store = Self::default();
        store.insert("Title 1".to_string(), "This is content 1".to_string(), true);
        store.insert("Title 2".to_string(), "This is content 2".to_string(), false);
        store
    }

    pub fn insert(&mut self, title: String, content: String, checked: bool) -> Todo {
        self.current_index += 1;
        let todo = Todo {
            id: self.current_index,
            title,
            content,
            checked,
        };
        self.items.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<TodoStore>>;

/// Router over an empty store.
pub fn app() -> Router {
    app_with(TodoStore::default())
}

pub fn app_with(store: TodoStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/todo/", get(list_todos).post(create_todo))
        .route("/api/todo/{id}/", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input.title, input.content, false);
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<usize>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(content) = input.content {
        todo.content = content;
    }
    if let Some(checked) = input.checked {
        todo.checked = checked;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<usize>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.items.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_integer_id() {
        let todo = Todo {
            id: 3,
            title: "Test".to_string(),
            content: "Body".to_string(),
            checked: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["content"], "Body");
        assert_eq!(json["checked"], false);
    }

    #[test]
    fn seeded_store_has_demo_items() {
        let store = TodoStore::seeded();
        let items: Vec<&Todo> = store.items.values().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert!(items[0].checked);
        assert_eq!(items[1].title, "Title 2");
        assert!(!items[1].checked);
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = TodoStore::default();
        let a = store.insert("a".to_string(), String::new(), false);
        let b = store.insert("b".to_string(), String::new(), false);
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[test]
    fn create_todo_requires_content() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":"No content"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.content.is_none());
        assert!(input.checked.is_none());
    }

    #[test]
    fn update_todo_partial_fields() {
        let input: UpdateTodo = serde_json::from_str(r#"{"checked":true}"#).unwrap();
        assert_eq!(input.checked, Some(true));
        assert!(input.title.is_none());
    }
}

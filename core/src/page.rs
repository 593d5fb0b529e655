//! Page model: fetch, render, and mutate the todo list through a `Transport`.
//!
//! # Design
//! `TodoPage` plays the role of the browser page. It owns the form inputs and
//! the rendered list container, and resynchronizes by full reload: after a
//! successful mutation it re-runs `ready`, re-fetching the canonical list
//! from the server, then clears the form. The page never patches its own
//! copy of the items.
//!
//! List failures are swallowed and render as an empty list. Mutation
//! failures leave the page untouched; `dispatch` drops them.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::events::{Outcome, UiEvent};
use crate::http::{HttpRequest, Transport};
use crate::types::{CreateTodo, TodoId, TodoItem, UpdateTodo};
use crate::view::{render_list, render_page, sort_for_display};

/// Current values of the create form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    pub title: String,
    pub content: String,
}

pub struct TodoPage<T> {
    client: TodoClient,
    transport: T,
    form: TodoForm,
    items: Vec<TodoItem>,
    html: String,
    reloads: usize,
}

impl<T: Transport> TodoPage<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            form: TodoForm::default(),
            items: Vec::new(),
            html: String::new(),
            reloads: 0,
        }
    }

    /// Fetch the collection. Any failure yields an empty list.
    pub fn list(&mut self) -> Vec<TodoItem> {
        let request = self.client.build_list();
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_list(response));
        match result {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "failed to fetch todo list");
                Vec::new()
            }
        }
    }

    /// Page-ready hook: fetch, sort, and render into the list container.
    pub fn ready(&mut self) -> Result<(), ApiError> {
        let mut items = self.list();
        sort_for_display(&mut items);
        self.html = render_list(&items)?;
        self.items = items;
        Ok(())
    }

    /// Submit the form inputs as a new item. Empty values are sent as-is.
    pub fn create(&mut self) -> Result<(), ApiError> {
        let input = CreateTodo {
            title: self.form.title.clone(),
            content: self.form.content.clone(),
        };
        let request = self.client.build_create(&input)?;
        self.mutate(request)
    }

    pub fn update(&mut self, id: &TodoId, changes: &UpdateTodo) -> Result<(), ApiError> {
        let request = self.client.build_update(id, changes)?;
        self.mutate(request)
    }

    pub fn check(&mut self, id: &TodoId, checked: bool) -> Result<(), ApiError> {
        self.update(id, &UpdateTodo::checked(checked))
    }

    pub fn delete(&mut self, id: &TodoId) -> Result<(), ApiError> {
        let request = self.client.build_delete(id);
        self.mutate(request)
    }

    /// Route an interaction to its operation.
    ///
    /// Failures are not reported beyond a debug log; the page simply does
    /// not reload.
    pub fn dispatch(&mut self, event: UiEvent) -> Outcome {
        if let Some(id) = event.target() {
            if !self.has_control(id) {
                debug!(%id, "no rendered control for event target");
                return Outcome::Ignored;
            }
        }
        let result = match event {
            UiEvent::Submit => self.create(),
            UiEvent::Toggle { id, checked } => self.check(&id, checked),
            UiEvent::Edit { id, changes } => self.update(&id, &changes),
            UiEvent::Delete { id } => self.delete(&id),
        };
        match result {
            Ok(()) => Outcome::Reloaded,
            Err(err) => {
                debug!(error = %err, "interaction failed, page not reloaded");
                Outcome::Stale
            }
        }
    }

    fn mutate(&mut self, request: HttpRequest) -> Result<(), ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(&request)?;
        self.client.parse_mutation(response)?;
        self.reload()
    }

    fn reload(&mut self) -> Result<(), ApiError> {
        self.ready()?;
        self.reloads += 1;
        self.form = TodoForm::default();
        Ok(())
    }

    fn has_control(&self, id: &TodoId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn form(&self) -> &TodoForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TodoForm {
        &mut self.form
    }

    /// Items as currently rendered, in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Contents of the list container.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The full document: form plus list container.
    pub fn render_page(&self) -> Result<String, ApiError> {
        render_page(&self.items, &self.form)
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }
}

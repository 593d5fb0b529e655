//! Client core for the todo web application.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `TodoPage` drives the
//! client through a host-supplied `Transport`, renders the list with
//! askama, and resynchronizes by full reload after every mutation.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The page never holds authoritative state. Mutations are followed by a
//!   re-fetch of the whole collection.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod events;
pub mod http;
pub mod page;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ApiError;
pub use events::{Outcome, UiEvent};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use page::{TodoForm, TodoPage};
pub use types::{CreateTodo, TodoId, TodoItem, UpdateTodo};

//! User interactions on a rendered page.
//!
//! Each variant corresponds to one listener attached to the rendered
//! controls: the create form, a row checkbox, a row edit button, and a row
//! delete button.

use crate::types::{TodoId, UpdateTodo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The create form was submitted.
    Submit,
    /// A row checkbox changed to `checked`.
    Toggle { id: TodoId, checked: bool },
    /// A row edit control produced new field values.
    Edit { id: TodoId, changes: UpdateTodo },
    /// A row delete control was clicked.
    Delete { id: TodoId },
}

impl UiEvent {
    /// The row this event originates from, if any.
    pub fn target(&self) -> Option<&TodoId> {
        match self {
            UiEvent::Submit => None,
            UiEvent::Toggle { id, .. } | UiEvent::Edit { id, .. } | UiEvent::Delete { id } => {
                Some(id)
            }
        }
    }
}

/// What a dispatched event did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation succeeded and the page was reloaded.
    Reloaded,
    /// The mutation failed; the page still shows the previous state.
    Stale,
    /// No rendered control matches the event target.
    Ignored,
}

//! HTML rendering of the todo list.
//!
//! Templates live in `core/templates/` and are compiled by askama, which
//! escapes every interpolated value.

use askama::Template;

use crate::error::ApiError;
use crate::page::TodoForm;
use crate::types::TodoItem;

#[derive(Template)]
#[template(path = "list.html")]
struct ListTemplate<'a> {
    items: &'a [TodoItem],
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    items: &'a [TodoItem],
    form: &'a TodoForm,
}

/// Order items for display: unchecked first, server order otherwise.
pub fn sort_for_display(items: &mut [TodoItem]) {
    items.sort_by_key(|item| item.checked);
}

/// Render the rows of the list container.
pub fn render_list(items: &[TodoItem]) -> Result<String, ApiError> {
    Ok(ListTemplate { items }.render()?)
}

/// Render the whole page: create form plus list container.
pub fn render_page(items: &[TodoItem], form: &TodoForm) -> Result<String, ApiError> {
    Ok(PageTemplate { items, form }.render()?)
}

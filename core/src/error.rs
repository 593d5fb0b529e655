//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the item
//! no longer exists" from "the server returned an unexpected status." All
//! other non-2xx responses land in `HttpError` with the raw status code and
//! body for debugging.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was obtained from the server.
    #[error("transport failed: {0}")]
    Transport(String),

    #[error("rendering failed: {0}")]
    Render(#[from] askama::Error),
}

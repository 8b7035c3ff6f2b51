//! Error types for the hero API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the hero does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body for debugging. `Transport` wraps network-level failures and displays
//! as the bare message, which is the format the service's log lines expect.

use std::fmt;

use crate::http::TransportError;

/// Errors returned by `HeroClient` parse methods and `HeroService`
/// operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested hero does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The transport failed before a response was received.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "hero not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.message)
    }
}

//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe HTTP exchanges as plain data.
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! without ever touching the network; the `Transport` implementation is
//! responsible for executing the actual I/O. This separation keeps the core
//! deterministic and lets tests substitute a canned transport.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between threads.

use std::fmt;

/// HTTP method for a request. The hero API has no DELETE operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// An HTTP request described as plain data.
///
/// Built by `HeroClient::build_*` methods and handed to a [`Transport`] for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`] after executing an `HttpRequest`, then passed
/// to `HeroClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A network-level failure reported by a [`Transport`].
///
/// Carries only a human-readable message; the client makes no finer
/// distinction between connection, DNS, or read failures.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Executes HTTP round-trips on behalf of the client.
///
/// Implementations own the socket-level details, including any timeout
/// policy — the client configures none and never retries. A response with a
/// non-2xx status is still `Ok`: status interpretation belongs to the
/// client's parse methods, not the transport.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

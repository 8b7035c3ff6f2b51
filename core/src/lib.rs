//! Client core for the hero API.
//!
//! # Overview
//! Four operations against a REST-ish hero resource: list, get-by-id,
//! update (full replace) and add. Request building and response parsing
//! live in the sans-io [`HeroClient`]; [`HeroService`] wires a client to an
//! injected [`Transport`] and [`Notifier`] and records one diagnostic line
//! per call.
//!
//! # Design
//! - `HeroClient` is stateless — it holds only `base_url`. Each operation is
//!   a `build_*` / `parse_*` pair, so the I/O boundary is explicit.
//! - `HeroService` returns explicit `Result`s (404 is a typed `NotFound`);
//!   the `*_or_empty` / `*_or_none` wrappers give UI callers the
//!   swallow-and-log behavior instead.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod notify;
pub mod service;
pub mod types;

pub use client::HeroClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use notify::{MessageLog, Notifier};
pub use service::HeroService;
pub use types::{CreateHero, Hero};

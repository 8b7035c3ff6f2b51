//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client crate never links against Axum internals. Integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single hero returned by the API.
///
/// `id` is assigned by the server. The client treats a `Hero` as a transient
/// record passed through each call; it keeps no authoritative copy and every
/// read goes back to the remote source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

/// Request payload for creating a new hero. Carries no `id` field, so the
/// client can never send one; the server assigns it and returns it in the
/// created `Hero`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHero {
    pub name: String,
}

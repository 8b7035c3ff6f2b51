//! Stateless HTTP request builder and response parser for the hero API.
//!
//! # Design
//! `HeroClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Executing the round-trip between the two is the transport's job, keeping
//! this layer deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateHero, Hero};

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Stateless client for the hero API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Read requests carry no headers; write requests
/// carry exactly `content-type: application/json`.
#[derive(Debug, Clone)]
pub struct HeroClient {
    base_url: String,
}

impl HeroClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hero(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Replace-by-identity: the full hero payload goes to the collection
    /// root, with the `id` inside the body selecting the record to replace.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/heroes", self.base_url),
            headers: vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            body: Some(body),
        })
    }

    pub fn build_add_hero(&self, input: &CreateHero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/heroes", self.base_url),
            headers: vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The PUT acknowledgement has no contracted shape, so the raw body is
    /// surfaced as a `serde_json::Value`. An empty body parses to `Null`.
    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response, 200)?;
        if response.body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

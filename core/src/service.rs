//! `HeroService`: executes hero operations over an injected transport and
//! reports outcomes through an injected notifier.
//!
//! # Design
//! Each operation is one build → execute → parse round-trip; the service
//! carries no state across calls beyond its fixed configuration, so
//! concurrent calls are independent. Failures surface as `Err` so callers
//! can tell "no data" from "operation failed"; the `*_or_empty` /
//! `*_or_none` wrappers restore the swallow-and-log behavior for UI callers
//! that only want a renderable value. Either way, every outcome leaves
//! exactly one `"HeroClient: ..."` line in the notifier.

use crate::client::HeroClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, Transport};
use crate::notify::Notifier;
use crate::types::{CreateHero, Hero};

/// Façade over the hero API: four operations, one log line per call.
///
/// No retries, no caching, no client-side timeout; timeout policy belongs to
/// the `Transport` implementation.
#[derive(Debug)]
pub struct HeroService<T, N> {
    client: HeroClient,
    transport: T,
    notifier: N,
}

impl<T: Transport, N: Notifier> HeroService<T, N> {
    pub fn new(base_url: &str, transport: T, notifier: N) -> Self {
        Self {
            client: HeroClient::new(base_url),
            transport,
            notifier,
        }
    }

    /// Fetch all heroes.
    pub fn get_heroes(&self) -> Result<Vec<Hero>, ApiError> {
        let result = self
            .execute(self.client.build_list_heroes())
            .and_then(|response| self.client.parse_list_heroes(response));
        match &result {
            Ok(_) => self.log("fetched heroes".to_string()),
            Err(err) => self.log(format!("getHeroes failed : {err}")),
        }
        result
    }

    /// Fetch a single hero by id. A missing hero is `Err(ApiError::NotFound)`,
    /// distinguishable from transport or decode failures.
    pub fn get_hero(&self, id: u64) -> Result<Hero, ApiError> {
        let result = self
            .execute(self.client.build_get_hero(id))
            .and_then(|response| self.client.parse_get_hero(response));
        match &result {
            Ok(_) => self.log(format!("fetched hero id={id}")),
            Err(err) => self.log(format!("getHero id={id} failed : {err}")),
        }
        result
    }

    /// Replace the hero identified by `hero.id` with the full payload.
    /// Returns the server's acknowledgement body, whose shape is not part of
    /// the contract.
    pub fn update_hero(&self, hero: &Hero) -> Result<serde_json::Value, ApiError> {
        let result = self
            .client
            .build_update_hero(hero)
            .and_then(|request| self.execute(request))
            .and_then(|response| self.client.parse_update_hero(response));
        match &result {
            Ok(_) => self.log(format!("update hero id={}", hero.id)),
            Err(err) => self.log(format!("updateHero failed : {err}")),
        }
        result
    }

    /// Create a new hero. The returned `Hero` carries the server-assigned id.
    pub fn add_hero(&self, input: &CreateHero) -> Result<Hero, ApiError> {
        let result = self
            .client
            .build_add_hero(input)
            .and_then(|request| self.execute(request))
            .and_then(|response| self.client.parse_add_hero(response));
        match &result {
            Ok(hero) => self.log(format!("added hero w/ id={}", hero.id)),
            Err(err) => self.log(format!("addHero failed : {err}")),
        }
        result
    }

    /// Fail-soft variant of [`get_heroes`](Self::get_heroes): any failure has
    /// already been logged and collapses to an empty list, so UI callers see
    /// a renderable value and nothing else.
    pub fn get_heroes_or_empty(&self) -> Vec<Hero> {
        self.get_heroes().unwrap_or_default()
    }

    /// Fail-soft variant of [`get_hero`](Self::get_hero): not-found, transport
    /// and decode failures all collapse to `None` after logging.
    pub fn get_hero_or_none(&self, id: u64) -> Option<Hero> {
        self.get_hero(id).ok()
    }

    fn execute(&self, request: HttpRequest) -> Result<crate::http::HttpResponse, ApiError> {
        self.transport.execute(request).map_err(ApiError::from)
    }

    fn log(&self, message: String) {
        self.notifier.add(&format!("HeroClient: {message}"));
    }
}

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateHero {
    pub name: String,
}

/// Hero store plus the next id to hand out. Ids are sequential and start
/// at 11, matching the dataset the hero API is known for.
#[derive(Debug)]
pub struct HeroDb {
    heroes: HashMap<u64, Hero>,
    next_id: u64,
}

impl Default for HeroDb {
    fn default() -> Self {
        Self {
            heroes: HashMap::new(),
            next_id: 11,
        }
    }
}

pub type Db = Arc<RwLock<HeroDb>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HeroDb::default()));
    Router::new()
        .route("/heroes", get(list_heroes).post(add_hero).put(update_hero))
        .route("/heroes/{id}", get(get_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_heroes(State(db): State<Db>) -> Json<Vec<Hero>> {
    let db = db.read().await;
    let mut heroes: Vec<Hero> = db.heroes.values().cloned().collect();
    heroes.sort_by_key(|h| h.id);
    Json(heroes)
}

async fn add_hero(
    State(db): State<Db>,
    Json(input): Json<CreateHero>,
) -> (StatusCode, Json<Hero>) {
    let mut db = db.write().await;
    let hero = Hero {
        id: db.next_id,
        name: input.name,
    };
    db.next_id += 1;
    db.heroes.insert(hero.id, hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Hero>, StatusCode> {
    let db = db.read().await;
    db.heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Full replace keyed by the `id` inside the body; the PUT goes to the
/// collection root, matching the client's wire contract.
async fn update_hero(
    State(db): State<Db>,
    Json(input): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut db = db.write().await;
    let hero = db.heroes.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    hero.name = input.name;
    Ok(Json(hero.clone()))
}

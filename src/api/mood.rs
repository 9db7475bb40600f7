//! Mood recommender routes

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{session_not_found, AppState};
use crate::core::SelectionLib;
use crate::models::{AdvisoryKind, Energy, Mood, Preference};

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: Mood,
    pub energy: Energy,
    /// Absent means the catalog's default genre; an empty list means none selected
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

/// Input options for the recommender form
#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub genres: Vec<String>,
    pub default_genre: Option<String>,
    pub moods: Vec<&'static str>,
    pub energies: Vec<&'static str>,
}

#[get("")]
pub async fn get_catalog(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.catalog;

    HttpResponse::Ok().json(CatalogView {
        genres: catalog.genre_names().into_iter().map(String::from).collect(),
        default_genre: catalog.default_genre().map(String::from),
        moods: Mood::ALL.iter().map(Mood::as_str).collect(),
        energies: Energy::ALL.iter().map(Energy::as_str).collect(),
    })
}

/// Recommend songs for a mood, energy and genre selection
#[post("/{sid}/mood")]
pub async fn recommend_songs(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<MoodRequest>,
) -> impl Responder {
    let sid = path.into_inner();
    let body = body.into_inner();

    let genres = body.genres.unwrap_or_else(|| {
        state
            .catalog
            .default_genre()
            .map(|g| vec![g.to_string()])
            .unwrap_or_default()
    });
    let preference = Preference::new(body.mood, body.energy, genres);

    let outcome =
        SelectionLib::recommend_songs(state.catalog, &preference, &mut rand::thread_rng());

    let stored = state.sessions.with_session(&sid, |s| {
        if outcome.kind() != Some(AdvisoryKind::EmptyInput) {
            s.last_songs = outcome.items.clone();
        }
    });

    match stored {
        Some(()) => HttpResponse::Ok().json(outcome),
        None => session_not_found(),
    }
}

/// Last computed song list for the session
#[get("/{sid}/mood")]
pub async fn get_last_songs(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let sid = path.into_inner();

    match state.sessions.with_session(&sid, |s| s.last_songs.clone()) {
        Some(songs) => HttpResponse::Ok().json(json!({"items": songs})),
        None => session_not_found(),
    }
}

/// Configure session-scoped mood routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(recommend_songs).service(get_last_songs);
}

/// Configure catalog routes
pub fn configure_catalog(cfg: &mut web::ServiceConfig) {
    cfg.service(get_catalog);
}

//! Session routes - start, inspect, end

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::{session_not_found, AppState};

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub session: Uuid,
    pub library_count: usize,
    pub last_search_count: usize,
    pub last_song_count: usize,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// Start a new session with an empty library
#[post("")]
pub async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let id = state.sessions.create();
    info!("Session {} started ({} active)", id, state.sessions.count());

    HttpResponse::Created().json(json!({"session": id}))
}

#[get("/{sid}")]
pub async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let sid = path.into_inner();

    let summary = state.sessions.with_session(&sid, |s| SessionSummary {
        session: s.id,
        library_count: s.library.len(),
        last_search_count: s.last_search.len(),
        last_song_count: s.last_songs.len(),
        created_at: s.created_at,
        last_seen: s.last_seen,
    });

    match summary {
        Some(summary) => HttpResponse::Ok().json(summary),
        None => session_not_found(),
    }
}

/// End a session, discarding its library
#[delete("/{sid}")]
pub async fn end_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let sid = path.into_inner();

    if state.sessions.end(&sid) {
        info!("Session {} ended", sid);
        HttpResponse::Ok().json(json!({"msg": "Session ended"}))
    } else {
        session_not_found()
    }
}

/// Configure session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_session)
        .service(get_session)
        .service(end_session);
}

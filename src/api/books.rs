//! Book search routes

use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{session_not_found, AppState};
use crate::core::BooksLib;
use crate::models::{AdvisoryKind, BookCard};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search hit with whether the session already owns it
#[derive(Debug, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub book: BookCard,
    pub in_library: bool,
}

/// Search books and remember the results as the session's add candidates
#[get("/{sid}/books/search")]
pub async fn search_books(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let sid = path.into_inner();
    if !state.sessions.exists(&sid) {
        return session_not_found();
    }

    let outcome = BooksLib::search(state.search.as_ref(), &query.q).await;

    let hits = state.sessions.with_session(&sid, |s| {
        // a rejected blank query leaves the previous results on screen
        if outcome.kind() != Some(AdvisoryKind::EmptyInput) {
            s.last_search = outcome.items.clone();
        }

        outcome.clone().map(|book| SearchHit {
            in_library: s.library.contains(&book.id),
            book: BookCard::from(&book),
        })
    });

    match hits {
        Some(hits) => HttpResponse::Ok().json(hits),
        None => session_not_found(),
    }
}

/// Configure book routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_books);
}

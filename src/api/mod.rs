//! REST API routes for shelfmood

pub mod books;
pub mod library;
pub mod mood;
pub mod session;

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::plugins::BookSearch;
use crate::stores::{SessionStore, SongCatalog};

/// Shared state handed to every route
pub struct AppState {
    pub sessions: SessionStore,
    pub search: Arc<dyn BookSearch>,
    pub catalog: &'static SongCatalog,
    pub recommendation_limit: usize,
}

impl AppState {
    pub fn new(
        search: Arc<dyn BookSearch>,
        catalog: &'static SongCatalog,
        recommendation_limit: usize,
    ) -> Self {
        Self {
            sessions: SessionStore::new(),
            search,
            catalog,
            recommendation_limit,
        }
    }
}

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Session-scoped routes
        .service(
            web::scope("/session")
                .configure(session::configure)
                .configure(books::configure)
                .configure(library::configure)
                .configure(mood::configure),
        )
        // Static catalog routes
        .service(web::scope("/catalog").configure(mood::configure_catalog));
}

pub(crate) fn session_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "Session not found"}))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::web;

    use super::AppState;
    use crate::plugins::stub::StubSearch;
    use crate::stores::SongCatalog;

    pub fn state_with(stub: StubSearch) -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(stub), SongCatalog::builtin(), 5))
    }
}

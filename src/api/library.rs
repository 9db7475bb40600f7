//! Library routes - view, add, remove, recommend
//!
//! Every mutation answers with the library as it stands afterwards, so the
//! client can re-render without a second request.

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use super::{session_not_found, AppState};
use crate::core::RecommendLib;
use crate::models::{Advisory, BookCard};
use crate::stores::Library;

#[derive(Debug, Deserialize)]
pub struct AddBookBody {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct LibraryEntry {
    pub index: usize,
    #[serde(flatten)]
    pub book: BookCard,
}

#[derive(Debug, Serialize)]
pub struct LibraryView {
    pub count: usize,
    pub items: Vec<LibraryEntry>,
    pub advisory: Option<Advisory>,
}

impl From<&Library> for LibraryView {
    fn from(library: &Library) -> Self {
        Self {
            count: library.len(),
            items: library
                .items()
                .iter()
                .enumerate()
                .map(|(index, book)| LibraryEntry {
                    index,
                    book: BookCard::from(book),
                })
                .collect(),
            advisory: library.is_empty().then(Advisory::library_empty),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsView {
    /// Title of the book the recommendations are derived from
    pub basis: Option<String>,
    pub items: Vec<BookCard>,
    pub advisory: Option<Advisory>,
}

#[get("/{sid}/library")]
pub async fn get_library(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let sid = path.into_inner();

    match state
        .sessions
        .with_session(&sid, |s| LibraryView::from(&s.library))
    {
        Some(view) => HttpResponse::Ok().json(view),
        None => session_not_found(),
    }
}

/// Add a book from the session's last search results
#[post("/{sid}/library")]
pub async fn add_book(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<AddBookBody>,
) -> impl Responder {
    let sid = path.into_inner();

    let result = state.sessions.with_session(&sid, |s| {
        let book = s.search_result(&body.id).cloned()?;
        let title = book.title().to_string();
        let added = s.library.add(book);
        Some((added, title, LibraryView::from(&s.library)))
    });

    match result {
        None => session_not_found(),
        Some(None) => HttpResponse::NotFound()
            .json(json!({"error": "Book is not in the last search results"})),
        Some(Some((added, title, library))) => {
            let msg = if added {
                format!("Added '{}' to your library", title)
            } else {
                format!("'{}' is already in your library", title)
            };
            debug!("{} ({})", msg, sid);

            HttpResponse::Ok().json(json!({
                "added": added,
                "msg": msg,
                "library": library,
            }))
        }
    }
}

/// Remove the book at `index`
#[delete("/{sid}/library/{index}")]
pub async fn remove_book(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, usize)>,
) -> impl Responder {
    let (sid, index) = path.into_inner();

    let result = state.sessions.with_session(&sid, |s| {
        s.library
            .remove(index)
            .map(|book| (BookCard::from(&book), LibraryView::from(&s.library)))
    });

    match result {
        None => session_not_found(),
        Some(Err(e)) => HttpResponse::NotFound().json(json!({"error": e.to_string()})),
        Some(Ok((removed, library))) => HttpResponse::Ok().json(json!({
            "msg": format!("Removed '{}' from your library", removed.title),
            "removed": removed,
            "library": library,
        })),
    }
}

/// Books by the author of the first library book, excluding owned ones
#[get("/{sid}/library/recommendations")]
pub async fn get_recommendations(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let sid = path.into_inner();

    // snapshot so the lock is not held across the search
    let Some(library) = state.sessions.with_session(&sid, |s| s.library.clone()) else {
        return session_not_found();
    };

    let outcome = RecommendLib::by_first_author(
        &library,
        state.search.as_ref(),
        state.recommendation_limit,
    )
    .await;

    HttpResponse::Ok().json(RecommendationsView {
        basis: library.first().map(|b| b.title().to_string()),
        items: outcome.items.iter().map(BookCard::from).collect(),
        advisory: outcome.advisory,
    })
}

/// Configure library routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_library)
        .service(add_book)
        .service(get_recommendations)
        .service(remove_book);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::state_with;
    use crate::models::Book;
    use crate::plugins::stub::StubSearch;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_add_then_remove() {
        let state = state_with(StubSearch::returning(vec![]));
        let sid = state.sessions.create();
        state.sessions.with_session(&sid, |s| {
            s.last_search = vec![
                Book::new("a").with_title("Alpha"),
                Book::new("b").with_title("Beta"),
            ];
        });

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::api::configure),
        )
        .await;

        for id in ["a", "b", "a"] {
            let req = test::TestRequest::post()
                .uri(&format!("/session/{}/library", sid))
                .set_json(json!({"id": id}))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 200);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/session/{}/library", sid))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 2);
        assert!(body["advisory"].is_null());

        let req = test::TestRequest::delete()
            .uri(&format!("/session/{}/library/0", sid))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["removed"]["id"], "a");
        assert_eq!(body["library"]["count"], 1);
        assert_eq!(body["library"]["items"][0]["id"], "b");
        assert_eq!(body["library"]["items"][0]["index"], 0);
    }

    #[actix_web::test]
    async fn test_duplicate_add_reports_not_added() {
        let state = state_with(StubSearch::returning(vec![]));
        let sid = state.sessions.create();
        state
            .sessions
            .with_session(&sid, |s| s.last_search = vec![Book::new("a")]);

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::api::configure),
        )
        .await;

        let mut added = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri(&format!("/session/{}/library", sid))
                .set_json(json!({"id": "a"}))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            added.push(body["added"].as_bool().unwrap());
        }

        assert_eq!(added, vec![true, false]);
        assert_eq!(state.sessions.with_session(&sid, |s| s.library.len()), Some(1));
    }

    #[actix_web::test]
    async fn test_add_unknown_book_and_remove_out_of_range() {
        let state = state_with(StubSearch::returning(vec![]));
        let sid = state.sessions.create();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/session/{}/library", sid))
            .set_json(json!({"id": "ghost"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);

        let req = test::TestRequest::delete()
            .uri(&format!("/session/{}/library/3", sid))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);

        let req = test::TestRequest::get()
            .uri(&format!("/session/{}/library", sid))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["advisory"]["kind"], "empty_input");
        assert_eq!(
            body["advisory"]["message"],
            Advisory::library_empty().message
        );

        let req = test::TestRequest::get()
            .uri(&format!("/session/{}/library/recommendations", sid))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["advisory"]["message"],
            Advisory::empty_library().message
        );
    }

    #[actix_web::test]
    async fn test_recommendations_exclude_owned() {
        let state = state_with(StubSearch::returning(vec![
            Book::new("1"),
            Book::new("2").with_title("Two"),
            Book::new("3"),
        ]));
        let sid = state.sessions.create();
        state.sessions.with_session(&sid, |s| {
            s.library
                .add(Book::new("1").with_title("One").with_authors(["X"]))
        });

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/session/{}/library/recommendations", sid))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["basis"], "One");
        assert_eq!(body["items"][0]["id"], "2");
        assert_eq!(body["items"][1]["id"], "3");
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert!(body["advisory"].is_null());
    }

    #[actix_web::test]
    async fn test_recommendations_degrade_on_failure() {
        let state = state_with(StubSearch::failing());
        let sid = state.sessions.create();
        state
            .sessions
            .with_session(&sid, |s| s.library.add(Book::new("1").with_authors(["X"])));

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(crate::api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/session/{}/library/recommendations", sid))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["advisory"]["kind"], "transport_failure");
    }
}

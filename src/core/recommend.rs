//! Author-based book recommendations

use tracing::{debug, warn};

use crate::models::{Advisory, Book, Outcome};
use crate::plugins::BookSearch;
use crate::stores::Library;

/// Recommendation generators
pub struct RecommendLib;

impl RecommendLib {
    /// Search query restricted to the first author of `book`
    pub fn author_query(book: &Book) -> Option<String> {
        book.first_author().map(|author| format!("inauthor:{}", author))
    }

    /// Books by the first author of the library's first book.
    ///
    /// Only `library.first()` is consulted. Books already in the library are
    /// dropped, service order is kept, and at most `limit` survive.
    pub async fn by_first_author(
        library: &Library,
        search: &dyn BookSearch,
        limit: usize,
    ) -> Outcome<Book> {
        let Some(basis) = library.first() else {
            return Outcome::empty(Advisory::empty_library());
        };

        let Some(query) = Self::author_query(basis) else {
            debug!("No author on {:?}, nothing to recommend", basis.id);
            return Outcome::empty(Advisory::no_recommendation_basis());
        };

        let candidates = match search.search(&query).await {
            Ok(books) => books,
            Err(e) => {
                warn!("Recommendation search {:?} failed: {}", query, e);
                return Outcome::empty(Advisory::transport_failure());
            }
        };

        let picks: Vec<Book> = candidates
            .into_iter()
            .filter(|b| !library.contains(&b.id))
            .take(limit)
            .collect();

        Outcome::or_advise(picks, Advisory::no_recommendations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdvisoryKind;
    use crate::plugins::stub::StubSearch;

    fn ids(outcome: &Outcome<Book>) -> Vec<&str> {
        outcome.items.iter().map(|b| b.id.as_str()).collect()
    }

    fn library_of(books: Vec<Book>) -> Library {
        let mut library = Library::new();
        for book in books {
            library.add(book);
        }
        library
    }

    #[test]
    fn test_author_query() {
        let book = Book::new("1").with_authors(["Ursula K. Le Guin", "Someone"]);
        assert_eq!(
            RecommendLib::author_query(&book).as_deref(),
            Some("inauthor:Ursula K. Le Guin")
        );
        assert!(RecommendLib::author_query(&Book::new("2")).is_none());
    }

    #[test]
    fn test_excludes_owned_and_keeps_order() {
        let library = library_of(vec![Book::new("1").with_authors(["X"])]);
        let stub = StubSearch::returning(vec![Book::new("1"), Book::new("2"), Book::new("3")]);

        let outcome = tokio_test::block_on(RecommendLib::by_first_author(&library, &stub, 5));

        assert_eq!(ids(&outcome), vec!["2", "3"]);
        assert!(outcome.advisory.is_none());
        assert_eq!(stub.queries(), vec!["inauthor:X".to_string()]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let library = library_of(vec![Book::new("own").with_authors(["X"])]);
        let results: Vec<Book> = (0..10).map(|i| Book::new(i.to_string())).collect();
        let stub = StubSearch::returning(results);

        let outcome = tokio_test::block_on(RecommendLib::by_first_author(&library, &stub, 5));
        assert_eq!(ids(&outcome), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_only_first_book_drives_query() {
        let library = library_of(vec![
            Book::new("a").with_authors(["First"]),
            Book::new("b").with_authors(["Second"]),
        ]);
        let stub = StubSearch::returning(vec![Book::new("b"), Book::new("c")]);

        let outcome = tokio_test::block_on(RecommendLib::by_first_author(&library, &stub, 5));
        assert_eq!(stub.queries(), vec!["inauthor:First".to_string()]);
        assert_eq!(ids(&outcome), vec!["c"]);
    }

    #[test]
    fn test_empty_library() {
        let stub = StubSearch::returning(vec![Book::new("1")]);
        let outcome =
            tokio_test::block_on(RecommendLib::by_first_author(&Library::new(), &stub, 5));

        assert_eq!(outcome.kind(), Some(AdvisoryKind::EmptyInput));
        assert!(stub.queries().is_empty());
    }

    #[test]
    fn test_no_author_is_distinct_from_no_match() {
        let library = library_of(vec![Book::new("1")]);
        let stub = StubSearch::returning(vec![Book::new("2")]);

        let outcome = tokio_test::block_on(RecommendLib::by_first_author(&library, &stub, 5));
        assert_eq!(outcome.kind(), Some(AdvisoryKind::NoRecommendationBasis));
        assert!(stub.queries().is_empty());
    }

    #[test]
    fn test_everything_owned_is_no_match() {
        let library = library_of(vec![Book::new("1").with_authors(["X"])]);
        let stub = StubSearch::returning(vec![Book::new("1")]);

        let outcome = tokio_test::block_on(RecommendLib::by_first_author(&library, &stub, 5));
        assert_eq!(outcome.kind(), Some(AdvisoryKind::NoMatch));
    }

    #[test]
    fn test_search_failure_degrades() {
        let library = library_of(vec![Book::new("1").with_authors(["X"])]);
        let stub = StubSearch::failing();

        let outcome = tokio_test::block_on(RecommendLib::by_first_author(&library, &stub, 5));
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.kind(), Some(AdvisoryKind::TransportFailure));
    }
}

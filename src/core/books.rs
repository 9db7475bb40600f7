//! Book search orchestration

use tracing::warn;

use crate::models::{Advisory, Book, Outcome};
use crate::plugins::BookSearch;

/// Book search entry points
pub struct BooksLib;

impl BooksLib {
    /// Search for `query`, turning every failure into an advisory.
    ///
    /// A blank query is rejected before the service is called.
    pub async fn search(search: &dyn BookSearch, query: &str) -> Outcome<Book> {
        let query = query.trim();
        if query.is_empty() {
            return Outcome::empty(Advisory::empty_query());
        }

        match search.search(query).await {
            Ok(books) => Outcome::or_advise(books, Advisory::no_search_results()),
            Err(e) => {
                warn!("Book search for {:?} failed: {}", query, e);
                Outcome::empty(Advisory::transport_failure())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdvisoryKind;
    use crate::plugins::stub::StubSearch;

    #[test]
    fn test_blank_query_skips_service() {
        let stub = StubSearch::returning(vec![Book::new("1")]);
        let outcome = tokio_test::block_on(BooksLib::search(&stub, "   "));

        assert_eq!(outcome.kind(), Some(AdvisoryKind::EmptyInput));
        assert!(stub.queries().is_empty());
    }

    #[test]
    fn test_results_pass_through_in_order() {
        let stub = StubSearch::returning(vec![Book::new("2"), Book::new("1")]);
        let outcome = tokio_test::block_on(BooksLib::search(&stub, " little prince "));

        assert!(outcome.advisory.is_none());
        let ids: Vec<&str> = outcome.items.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(stub.queries(), vec!["little prince".to_string()]);
    }

    #[test]
    fn test_no_results_is_no_match() {
        let stub = StubSearch::returning(vec![]);
        let outcome = tokio_test::block_on(BooksLib::search(&stub, "zzzz"));
        assert_eq!(outcome.kind(), Some(AdvisoryKind::NoMatch));
    }

    #[test]
    fn test_failure_degrades_to_advisory() {
        let stub = StubSearch::failing();
        let outcome = tokio_test::block_on(BooksLib::search(&stub, "dune"));
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.kind(), Some(AdvisoryKind::TransportFailure));
    }
}

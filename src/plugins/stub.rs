//! Canned book search for tests

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{BookSearch, SearchError};
use crate::models::Book;

/// Answers every query with the same books, or with a failure
pub struct StubSearch {
    books: Option<Vec<Book>>,
    queries: Mutex<Vec<String>>,
}

impl StubSearch {
    pub fn returning(books: Vec<Book>) -> Self {
        Self {
            books: Some(books),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            books: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl BookSearch for StubSearch {
    async fn search(&self, query: &str) -> Result<Vec<Book>, SearchError> {
        self.queries.lock().push(query.to_string());
        match &self.books {
            Some(books) => Ok(books.clone()),
            None => Err(SearchError::Status(503)),
        }
    }
}

//! External services shelfmood talks to
//!
//! Each service sits behind a trait so the core logic can be driven by stubs in
//! tests and by the real HTTP client in production.

pub mod google_books;
#[cfg(test)]
pub mod stub;

pub use google_books::{GoogleBooksClient, SearchError};

use async_trait::async_trait;

use crate::models::Book;

/// Free-text book search
///
/// Returns up to the service's cap of books in service order, or an error on
/// transport / status / decode failure. Implementations must not retry or cache.
#[async_trait]
pub trait BookSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Book>, SearchError>;
}

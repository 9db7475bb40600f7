//! Library store - a session's personal book collection

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Book;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("no book at index {index} (library holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered books plus the set of their ids
///
/// `ids` always equals the ids of `items`, so a book can never be in the
/// library twice. Both fields change together inside `add` and `remove`.
#[derive(Debug, Clone, Default)]
pub struct Library {
    items: Vec<Book>,
    ids: HashSet<String>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `book` unless its id is already present. Returns whether it was added.
    pub fn add(&mut self, book: Book) -> bool {
        if self.ids.contains(&book.id) {
            return false;
        }

        self.ids.insert(book.id.clone());
        self.items.push(book);
        true
    }

    /// Remove and return the book at `index`
    pub fn remove(&mut self, index: usize) -> Result<Book, LibraryError> {
        if index >= self.items.len() {
            return Err(LibraryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let book = self.items.remove(index);
        self.ids.remove(&book.id);
        Ok(book)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn items(&self) -> &[Book] {
        &self.items
    }

    /// The book recommendations are derived from
    pub fn first(&self) -> Option<&Book> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

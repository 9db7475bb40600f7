//! Book model

use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "No title information";
pub const NO_AUTHORS: &str = "No author information";
pub const NO_PUBLISHER: &str = "No publisher information";
pub const NO_PUBLISHED_DATE: &str = "No publication date information";
pub const NO_DESCRIPTION: &str = "No description available.";

/// A book returned by the search service
///
/// Only `id` is required. Every display field is optional and the accessors
/// below fall back to a placeholder, so callers never deal with raw `None`s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    /// Opaque volume id, used as the dedup key
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Ordered author names, possibly empty
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Book {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// Authors joined for display
    pub fn authors_display(&self) -> String {
        if self.authors.is_empty() {
            NO_AUTHORS.to_string()
        } else {
            self.authors.join(", ")
        }
    }

    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    pub fn publisher(&self) -> &str {
        self.publisher.as_deref().unwrap_or(NO_PUBLISHER)
    }

    pub fn published_date(&self) -> &str {
        self.published_date.as_deref().unwrap_or(NO_PUBLISHED_DATE)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl std::hash::Hash for Book {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
impl Book {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }
}

/// Book as rendered to clients, with every placeholder already applied
#[derive(Debug, Clone, Serialize)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub published_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title().to_string(),
            authors: book.authors_display(),
            publisher: book.publisher().to_string(),
            published_date: book.published_date().to_string(),
            description: book.description().to_string(),
            thumbnail: book.thumbnail().map(str::to_string),
        }
    }
}

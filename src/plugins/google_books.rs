//! Google Books plugin - free-text volume search

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::BookSearch;
use crate::config::UserConfig;
use crate::models::Book;

const USER_AGENT: &str = concat!("shelfmood/", env!("CARGO_PKG_VERSION"));

/// Why a search produced no usable answer
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search service answered with status {0}")]
    Status(u16),

    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Volumes endpoint response. `items` is absent when nothing matched.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Option<Vec<RawVolume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVolume {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Option<Vec<String>>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageLinks {
    #[serde(default)]
    thumbnail: Option<String>,
}

impl RawVolume {
    /// The only place raw volume fields are mapped onto `Book`.
    /// Volumes without an id cannot be deduplicated and are dropped.
    fn into_book(self) -> Option<Book> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let info = self.volume_info.unwrap_or_default();

        Some(Book {
            id,
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            publisher: info.publisher,
            published_date: info.published_date,
            description: info.description,
            thumbnail_url: info.image_links.and_then(|links| links.thumbnail),
        })
    }
}

/// Decode a volumes response body into books, keeping service order
pub fn parse_volumes(body: &str, max_results: usize) -> Result<Vec<Book>, SearchError> {
    let response: VolumesResponse = serde_json::from_str(body)?;

    Ok(response
        .items
        .unwrap_or_default()
        .into_iter()
        .filter_map(RawVolume::into_book)
        .take(max_results)
        .collect())
}

/// Google Books client
pub struct GoogleBooksClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    max_results: usize,
}

impl GoogleBooksClient {
    pub fn from_config(config: &UserConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.books_api_url.clone(),
            api_key: config.books_api_key.clone().filter(|k| !k.is_empty()),
            max_results: config.search_max_results,
        })
    }
}

#[async_trait]
impl BookSearch for GoogleBooksClient {
    async fn search(&self, query: &str) -> Result<Vec<Book>, SearchError> {
        let max_results = self.max_results.to_string();
        let mut request = self
            .client
            .get(&self.api_url)
            .query(&[("q", query), ("maxResults", max_results.as_str())]);

        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let books = parse_volumes(&body, self.max_results)?;

        debug!("search {:?} returned {} books", query, books.len());
        Ok(books)
    }
}

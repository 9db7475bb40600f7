//! Advisories explain why a result list is empty

use serde::Serialize;

/// Category of an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// The search service could not be reached or answered garbage
    TransportFailure,
    /// Blank query, no genre selected, or nothing in the library yet
    EmptyInput,
    /// The request ran fine but found nothing
    NoMatch,
    /// The first library book has no author to search by
    NoRecommendationBasis,
}

/// A non-fatal, user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: &'static str,
}

impl Advisory {
    fn new(kind: AdvisoryKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    pub fn transport_failure() -> Self {
        Self::new(
            AdvisoryKind::TransportFailure,
            "The book search service could not be reached. Please try again later.",
        )
    }

    pub fn empty_query() -> Self {
        Self::new(AdvisoryKind::EmptyInput, "Please enter a search term.")
    }

    pub fn no_genre_selected() -> Self {
        Self::new(AdvisoryKind::EmptyInput, "Please select at least one genre.")
    }

    pub fn empty_library() -> Self {
        Self::new(
            AdvisoryKind::EmptyInput,
            "Add books to your library to get recommendations.",
        )
    }

    pub fn library_empty() -> Self {
        Self::new(
            AdvisoryKind::EmptyInput,
            "No books added yet. Search above to add some.",
        )
    }

    pub fn no_search_results() -> Self {
        Self::new(
            AdvisoryKind::NoMatch,
            "No results found. Try a different search term.",
        )
    }

    pub fn no_song_match() -> Self {
        Self::new(
            AdvisoryKind::NoMatch,
            "No songs match that combination. Try a different mood or energy.",
        )
    }

    pub fn no_recommendations() -> Self {
        Self::new(AdvisoryKind::NoMatch, "No recommendations could be found.")
    }

    pub fn no_recommendation_basis() -> Self {
        Self::new(
            AdvisoryKind::NoRecommendationBasis,
            "The first book in your library has no author information, so no recommendation is possible.",
        )
    }
}

/// A result list with the reason it may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    pub items: Vec<T>,
    pub advisory: Option<Advisory>,
}

impl<T> Outcome<T> {
    pub fn found(items: Vec<T>) -> Self {
        Self {
            items,
            advisory: None,
        }
    }

    /// Empty outcome carrying `advisory`
    pub fn empty(advisory: Advisory) -> Self {
        Self {
            items: Vec::new(),
            advisory: Some(advisory),
        }
    }

    /// `found(items)` unless `items` is empty, in which case `on_empty` explains why
    pub fn or_advise(items: Vec<T>, on_empty: Advisory) -> Self {
        if items.is_empty() {
            Self::empty(on_empty)
        } else {
            Self::found(items)
        }
    }

    pub fn kind(&self) -> Option<AdvisoryKind> {
        self.advisory.as_ref().map(|a| a.kind)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Outcome<U> {
        Outcome {
            items: self.items.into_iter().map(f).collect(),
            advisory: self.advisory,
        }
    }
}

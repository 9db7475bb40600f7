//! Data models for shelfmood
//!
//! Books come from the search service, songs from the static catalog. Advisories
//! and outcomes are shared by both halves to explain empty results.

mod advisory;
mod book;
mod enums;
mod song;

pub use advisory::{Advisory, AdvisoryKind, Outcome};
pub use book::{Book, BookCard};
pub use enums::{Energy, Mood};
pub use song::{Preference, Song};

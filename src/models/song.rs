//! Song and preference models

use serde::{Deserialize, Serialize};

use super::{Energy, Mood};

/// A catalog song. The genre lives on the catalog grouping, not on the song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub artist: String,
    pub title: String,
    pub mood: Mood,
    pub energy: Energy,
}

impl Song {
    pub fn new(artist: &str, title: &str, mood: Mood, energy: Energy) -> Self {
        Self {
            artist: artist.to_string(),
            title: title.to_string(),
            mood,
            energy,
        }
    }

    pub fn matches(&self, mood: Mood, energy: Energy) -> bool {
        self.mood == mood && self.energy == energy
    }

    /// "{artist} - {title} ({genre})"
    pub fn display(&self, genre: &str) -> String {
        format!("{} - {} ({})", self.artist, self.title, genre)
    }
}

/// One recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub mood: Mood,
    pub energy: Energy,
    /// Selected genres, scanned in this order
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Preference {
    pub fn new<I, S>(mood: Mood, energy: Energy, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mood,
            energy,
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }
}

//! Song catalog - fixed genre to song table for the mood recommender

use once_cell::sync::Lazy;

use crate::models::{Energy, Mood, Song};

static BUILTIN_CATALOG: Lazy<SongCatalog> = Lazy::new(SongCatalog::builtin_table);

/// Songs grouped under one genre
#[derive(Debug, Clone)]
pub struct Genre {
    pub name: String,
    pub songs: Vec<Song>,
}

/// Read-only, ordered genre table
#[derive(Debug, Clone, Default)]
pub struct SongCatalog {
    genres: Vec<Genre>,
}

impl SongCatalog {
    /// The catalog shipped with the binary
    pub fn builtin() -> &'static SongCatalog {
        &BUILTIN_CATALOG
    }

    pub fn from_genres<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Song>)>,
        S: Into<String>,
    {
        Self {
            genres: genres
                .into_iter()
                .map(|(name, songs)| Genre {
                    name: name.into(),
                    songs,
                })
                .collect(),
        }
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn songs(&self, genre: &str) -> Option<&[Song]> {
        self.genres
            .iter()
            .find(|g| g.name == genre)
            .map(|g| g.songs.as_slice())
    }

    /// First catalog genre, preselected when the caller picks none explicitly
    pub fn default_genre(&self) -> Option<&str> {
        self.genres.first().map(|g| g.name.as_str())
    }

    fn builtin_table() -> Self {
        use Energy::*;
        use Mood::*;

        Self::from_genres([
            (
                "K-POP",
                vec![
                    Song::new("BTS", "Dynamite", Exciting, High),
                    Song::new("BLACKPINK", "How You Like That", Exciting, High),
                    Song::new("NewJeans", "Hype Boy", Exciting, Medium),
                    Song::new("IU", "Palette", Calm, Medium),
                    Song::new("IU", "Through the Night", Calm, Low),
                    Song::new("BTS", "Spring Day", Sad, Medium),
                    Song::new("Taeyeon", "Fine", Sad, Low),
                ],
            ),
            (
                "Pop",
                vec![
                    Song::new("Dua Lipa", "Levitating", Exciting, High),
                    Song::new("The Weeknd", "Blinding Lights", Exciting, High),
                    Song::new("Harry Styles", "As It Was", Exciting, Medium),
                    Song::new("Ed Sheeran", "Perfect", Calm, Low),
                    Song::new("Billie Eilish", "Ocean Eyes", Calm, Low),
                    Song::new("Lewis Capaldi", "Someone You Loved", Sad, Medium),
                    Song::new("Adele", "Someone Like You", Sad, Low),
                ],
            ),
            (
                "Rock",
                vec![
                    Song::new("Queen", "Don't Stop Me Now", Exciting, High),
                    Song::new("AC/DC", "Highway to Hell", Exciting, High),
                    Song::new("Oasis", "Wonderwall", Calm, Medium),
                    Song::new("Coldplay", "Yellow", Calm, Medium),
                    Song::new("Linkin Park", "Numb", Sad, High),
                    Song::new("Radiohead", "No Surprises", Sad, Low),
                ],
            ),
            (
                "Jazz",
                vec![
                    Song::new("Benny Goodman", "Sing, Sing, Sing", Exciting, High),
                    Song::new("Frank Sinatra", "Fly Me to the Moon", Calm, Medium),
                    Song::new("Dave Brubeck Quartet", "Take Five", Calm, Medium),
                    Song::new("Louis Armstrong", "What a Wonderful World", Calm, Low),
                    Song::new("Chet Baker", "My Funny Valentine", Sad, Low),
                    Song::new("Billie Holiday", "Gloomy Sunday", Sad, Low),
                ],
            ),
            (
                "Hip-Hop",
                vec![
                    Song::new("Kendrick Lamar", "HUMBLE.", Exciting, High),
                    Song::new("Eminem", "Lose Yourself", Exciting, High),
                    Song::new("Drake", "Hotline Bling", Calm, Medium),
                    Song::new("Mac Miller", "Good News", Sad, Low),
                ],
            ),
            (
                "Classical",
                vec![
                    Song::new("Beethoven", "Symphony No. 5", Exciting, High),
                    Song::new("Vivaldi", "The Four Seasons: Summer", Exciting, High),
                    Song::new("Pachelbel", "Canon in D", Calm, Medium),
                    Song::new("Debussy", "Clair de Lune", Calm, Low),
                    Song::new("Chopin", "Nocturne Op. 9 No. 2", Calm, Low),
                    Song::new("Samuel Barber", "Adagio for Strings", Sad, Low),
                ],
            ),
        ])
    }
}

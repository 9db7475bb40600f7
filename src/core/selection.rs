//! Mood/energy/genre song selection

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Advisory, Outcome, Preference};
use crate::stores::SongCatalog;

/// Song selection over a catalog
pub struct SelectionLib;

impl SelectionLib {
    /// Songs matching `preference`, formatted as "{artist} - {title} ({genre})".
    ///
    /// Genres are scanned in the order the caller listed them and songs in catalog
    /// order. A genre listed twice is scanned once, at its first position. No genres
    /// at all short-circuits to an `EmptyInput` advisory without touching the
    /// catalog; a scan that finds nothing yields `NoMatch`.
    pub fn filter_songs(catalog: &SongCatalog, preference: &Preference) -> Outcome<String> {
        if preference.genres.is_empty() {
            return Outcome::empty(Advisory::no_genre_selected());
        }

        let (mood, energy) = (preference.mood, preference.energy);
        let mut seen = HashSet::new();
        let matches: Vec<String> = preference
            .genres
            .iter()
            .filter(|genre| seen.insert(genre.as_str()))
            .filter_map(|genre| catalog.songs(genre).map(|songs| (genre, songs)))
            .flat_map(move |(genre, songs)| {
                songs
                    .iter()
                    .filter(move |s| s.matches(mood, energy))
                    .map(move |s| s.display(genre))
            })
            .collect();

        Outcome::or_advise(matches, Advisory::no_song_match())
    }

    /// `filter_songs` followed by a uniform shuffle
    pub fn recommend_songs<R: Rng + ?Sized>(
        catalog: &SongCatalog,
        preference: &Preference,
        rng: &mut R,
    ) -> Outcome<String> {
        let mut outcome = Self::filter_songs(catalog, preference);
        outcome.items.shuffle(rng);
        outcome
    }
}

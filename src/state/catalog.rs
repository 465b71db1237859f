use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// A playable song from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    /// Title players have to guess.
    pub title: String,
    /// Performing artist, revealed by the second hint.
    pub artist: String,
}

/// Opening of a title given away by the first hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOpening<'a> {
    /// The title is a single word: only its first letter is given.
    FirstLetter(char),
    /// The title has several words: the first one is given.
    FirstWord(&'a str),
}

impl Song {
    /// Build a song from its title and artist.
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Whether `guess` names this song, ignoring case and surrounding whitespace.
    pub fn matches_title(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.title.trim().to_lowercase()
    }

    /// Part of the title revealed by the first hint, or `None` for a blank title.
    pub fn title_opening(&self) -> Option<TitleOpening<'_>> {
        let mut words = self.title.split_whitespace();
        let first = words.next()?;
        if words.next().is_some() {
            Some(TitleOpening::FirstWord(first))
        } else {
            first.chars().next().map(TitleOpening::FirstLetter)
        }
    }
}

/// The catalog was built without any song.
#[derive(Debug, Error)]
#[error("the song catalog must contain at least one song")]
pub struct EmptyCatalog;

/// Fixed, non-empty list of songs rounds are drawn from.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty song list.
    pub fn new(songs: Vec<Song>) -> Result<Self, EmptyCatalog> {
        if songs.is_empty() {
            return Err(EmptyCatalog);
        }
        Ok(Self { songs })
    }

    /// Songs in catalog order.
    #[cfg(test)]
    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs in the catalog.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Always false: a catalog holds at least one song.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Draw a song uniformly at random. Successive draws are independent.
    pub fn pick_random(&self) -> &Song {
        let index = rand::rng().random_range(0..self.songs.len());
        &self.songs[index]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            songs: default_songs(),
        }
    }
}

/// Built-in catalog shipped with the binary.
fn default_songs() -> Vec<Song> {
    vec![
        Song::new("Shape of You", "Ed Sheeran"),
        Song::new("Blinding Lights", "The Weeknd"),
        Song::new("Rolling in the Deep", "Adele"),
        Song::new("Bohemian Rhapsody", "Queen"),
        Song::new("Billie Jean", "Michael Jackson"),
        Song::new("Hello", "Adele"),
        Song::new("Someone Like You", "Adele"),
        Song::new("Uptown Funk", "Mark Ronson ft. Bruno Mars"),
        Song::new("Imagine", "John Lennon"),
        Song::new("Halo", "Beyoncé"),
        Song::new("Bad Guy", "Billie Eilish"),
        Song::new("Thriller", "Michael Jackson"),
        Song::new("Smells Like Teen Spirit", "Nirvana"),
        Song::new("Levitating", "Dua Lipa"),
        Song::new("Believer", "Imagine Dragons"),
    ]
}

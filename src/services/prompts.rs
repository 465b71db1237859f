//! Prompt templates sent to the text generator.

use crate::state::catalog::Song;

/// Ask for a short excerpt of the song's lyrics that keeps the title hidden.
pub fn lyric_snippet(song: &Song) -> String {
    format!(
        "Generate a short (2-4 lines) lyric snippet for the song \"{}\" by {}, without revealing the title.",
        song.title, song.artist
    )
}

/// Ask for a one-line genre and theme description of the song.
pub fn genre_theme(song: &Song) -> String {
    format!(
        "Only return the genre and theme of the song \"{}\" by {}. Example: \"Pop, Love & Relationships\"",
        song.title, song.artist
    )
}

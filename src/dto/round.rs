use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::validation::validate_guess,
    services::round_service::{GuessOutcome, Hint, RoundOpening},
};

/// Snippet shown when lyric generation failed.
pub const SNIPPET_FALLBACK: &str = "Error fetching lyrics.";
/// Hint shown before any round was started.
pub const NO_ROUND_HINT: &str = "No song has been generated yet! Please generate a lyric first.";
/// Hint shown when the genre and theme could not be generated.
pub const GENRE_THEME_FALLBACK: &str = "Could not generate genre & theme.";
/// Hint shown once every hint of the round was granted.
pub const HINTS_EXHAUSTED: &str = "No more hints available!";

/// Response of `GET /lyrics`.
///
/// `title` and `artist` are sent along with the snippet so the client can
/// reveal the answer once the player runs out of attempts; both are `null`
/// when the snippet could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LyricsResponse {
    /// Generated snippet or fallback text.
    pub snippet: String,
    /// Title of the new song.
    pub title: Option<String>,
    /// Artist of the new song.
    pub artist: Option<String>,
}

impl From<RoundOpening> for LyricsResponse {
    fn from(opening: RoundOpening) -> Self {
        match opening.snippet {
            Ok(snippet) => Self {
                snippet,
                title: Some(opening.song.title),
                artist: Some(opening.song.artist),
            },
            Err(_) => Self {
                snippet: SNIPPET_FALLBACK.into(),
                title: None,
                artist: None,
            },
        }
    }
}

/// Response of `GET /hint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HintResponse {
    /// Hint text or informational message.
    pub hint: String,
}

impl From<Hint> for HintResponse {
    fn from(hint: Hint) -> Self {
        let hint = match hint {
            Hint::NoActiveRound => NO_ROUND_HINT.to_string(),
            Hint::FirstLetter(letter) => format!("First letter: \"{letter}\""),
            Hint::FirstWord(word) => format!("First word: \"{word}\""),
            Hint::Artist(artist) => format!("Artist: \"{artist}\""),
            Hint::GenreTheme(Ok(description)) => format!("Genre & Theme: {description}"),
            Hint::GenreTheme(Err(_)) => GENRE_THEME_FALLBACK.to_string(),
            Hint::Exhausted => HINTS_EXHAUSTED.to_string(),
        };
        Self { hint }
    }
}

/// Body of `POST /check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckGuessRequest {
    /// Title proposed by the player. A missing field is treated as empty.
    #[serde(default)]
    #[validate(custom(function = "validate_guess"))]
    pub user_guess: String,
}

impl CheckGuessRequest {
    /// Wrap a raw guess.
    pub fn new(user_guess: impl Into<String>) -> Self {
        Self {
            user_guess: user_guess.into(),
        }
    }
}

/// Response of `POST /check`. The correct title is always included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckGuessResponse {
    /// Whether the guess matched.
    pub correct: bool,
    /// Title of the current song.
    pub correct_title: String,
}

impl From<GuessOutcome> for CheckGuessResponse {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            correct: outcome.correct,
            correct_title: outcome.correct_title,
        }
    }
}

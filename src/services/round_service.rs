//! Round engine: start a round, grant hints, and check guesses against the current song.

use tracing::{debug, info, warn};
use validator::Validate;

use crate::{
    dao::text_generator::GenerationResult,
    dto::round::CheckGuessRequest,
    error::ServiceError,
    services::prompts,
    state::{
        SharedState,
        catalog::{Song, TitleOpening},
        round::{HintStage, Round},
    },
};

/// Outcome of starting a round: the chosen song and its generated snippet.
#[derive(Debug)]
pub struct RoundOpening {
    /// Song of the new round.
    pub song: Song,
    /// Generated snippet, or why it could not be generated.
    pub snippet: GenerationResult<String>,
}

/// Content granted by a hint request.
#[derive(Debug)]
pub enum Hint {
    /// No round has been started yet.
    NoActiveRound,
    /// First letter of a single-word title.
    FirstLetter(char),
    /// First word of a multi-word title.
    FirstWord(String),
    /// Name of the artist.
    Artist(String),
    /// Generated genre and theme description.
    GenreTheme(GenerationResult<String>),
    /// Every hint of the round was already granted.
    Exhausted,
}

/// Result of comparing a guess with the current song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Whether the guess matched the title.
    pub correct: bool,
    /// Title of the current song.
    pub correct_title: String,
}

/// Pick a random song, make it the current round, and generate its snippet.
///
/// The new round starts without any hint even when generation fails.
pub async fn start_round(state: &SharedState) -> RoundOpening {
    let song = state.catalog().pick_random().clone();
    state.replace_round(Round::new(song.clone())).await;
    info!(artist = %song.artist, "started a new round");

    let snippet = state.generate(prompts::lyric_snippet(&song)).await;
    if let Err(err) = &snippet {
        warn!(error = %err, "failed to generate lyric snippet");
    }

    RoundOpening { song, snippet }
}

/// Grant the next hint of the current round.
pub async fn advance_hint(state: &SharedState) -> Hint {
    let Some((song, stage)) = state.advance_hint().await else {
        debug!("hint requested before any round");
        return Hint::NoActiveRound;
    };

    match stage {
        HintStage::FirstWord => match song.title_opening() {
            Some(TitleOpening::FirstLetter(letter)) => Hint::FirstLetter(letter),
            Some(TitleOpening::FirstWord(word)) => Hint::FirstWord(word.to_string()),
            None => Hint::FirstWord(song.title),
        },
        HintStage::Artist => Hint::Artist(song.artist),
        HintStage::GenreTheme => {
            let description = state.generate(prompts::genre_theme(&song)).await;
            if let Err(err) = &description {
                warn!(error = %err, "failed to generate genre & theme");
            }
            Hint::GenreTheme(description)
        }
        // Advancing never lands back on `NotStarted`.
        HintStage::NotStarted | HintStage::Exhausted => Hint::Exhausted,
    }
}

/// Compare `request` with the title of the current round.
///
/// Attempts are not counted here; the client owns the attempt budget.
pub async fn check_guess(
    state: &SharedState,
    request: CheckGuessRequest,
) -> Result<GuessOutcome, ServiceError> {
    let song = state
        .current_song()
        .await
        .ok_or(ServiceError::NoActiveRound)?;
    request.validate()?;

    let correct = song.matches_title(&request.user_guess);
    debug!(correct, "checked guess");

    Ok(GuessOutcome {
        correct,
        correct_title: song.title,
    })
}

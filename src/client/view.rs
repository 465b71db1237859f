use tracing::debug;

use crate::{client::api::RoundApi, dto::round::CheckGuessRequest};

/// Attempts granted per round.
pub const MAX_ATTEMPTS: u8 = 3;
/// Hints a player may request per round.
pub const MAX_HINTS: usize = 3;

/// Error shown when the snippet request fails.
pub const FETCH_LYRICS_FAILED: &str = "Failed to fetch lyrics. Check your connection.";
/// Error shown when a hint request fails.
pub const FETCH_HINT_FAILED: &str = "Failed to fetch hint.";
/// Error shown when a guess could not be checked.
pub const CHECK_FAILED: &str = "Failed to check answer. Please try again.";
/// Error shown when hints or guesses are requested before any snippet.
pub const NO_SNIPPET: &str = "Please generate a lyric snippet first!";
/// Error shown once the local hint budget is spent.
pub const NO_MORE_HINTS: &str = "No more hints available!";
/// Error shown for a blank guess.
pub const EMPTY_GUESS: &str = "Please enter a guess!";
/// Result shown after a correct guess.
pub const CORRECT_ANSWER: &str = "Correct Answer!";

/// Local state of one player's view of the game.
///
/// The server owns the round; this only mirrors it and keeps the attempt
/// budget, which the server does not track.
#[derive(Debug, Clone)]
pub struct ClientView {
    snippet: Option<String>,
    correct_title: Option<String>,
    hints: Vec<String>,
    attempts_left: u8,
    game_over: bool,
    result: Option<String>,
    error: Option<String>,
}

impl Default for ClientView {
    fn default() -> Self {
        Self {
            snippet: None,
            correct_title: None,
            hints: Vec::new(),
            attempts_left: MAX_ATTEMPTS,
            game_over: false,
            result: None,
            error: None,
        }
    }
}

impl ClientView {
    /// Empty view with the full attempt budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snippet of the current round.
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    /// Hints received for the current round, oldest first.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Hints that may still be requested.
    pub fn hints_left(&self) -> usize {
        MAX_HINTS.saturating_sub(self.hints.len())
    }

    /// Wrong guesses still allowed.
    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    /// Whether the round was won or every attempt was spent.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome of the latest guess.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Latest error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a new round on the server and clear every round-local field.
    pub async fn fetch_snippet(&mut self, api: &dyn RoundApi) {
        match api.fetch_lyrics().await {
            Ok(lyrics) => {
                self.snippet = Some(lyrics.snippet);
                self.correct_title = lyrics.title;
                self.hints.clear();
                self.reset();
            }
            Err(err) => {
                debug!(error = %err, "lyrics request failed");
                self.error = Some(FETCH_LYRICS_FAILED.into());
            }
        }
    }

    /// Clear result, error and attempts while keeping the current snippet.
    ///
    /// Received hints are kept: the server's hint stage only restarts with a
    /// new snippet, so the local hint budget carries over too.
    pub fn reset(&mut self) {
        self.attempts_left = MAX_ATTEMPTS;
        self.game_over = false;
        self.result = None;
        self.error = None;
    }

    /// Ask the server for the next hint, at most [`MAX_HINTS`] times per round.
    pub async fn request_hint(&mut self, api: &dyn RoundApi) {
        if self.snippet.is_none() {
            self.error = Some(NO_SNIPPET.into());
            return;
        }
        if self.game_over {
            return;
        }
        if self.hints.len() >= MAX_HINTS {
            self.error = Some(NO_MORE_HINTS.into());
            return;
        }

        match api.fetch_hint().await {
            Ok(response) => self.hints.push(response.hint),
            Err(err) => {
                debug!(error = %err, "hint request failed");
                self.error = Some(FETCH_HINT_FAILED.into());
            }
        }
    }

    /// Submit `guess`, spending one attempt when it is wrong.
    ///
    /// On the last wrong attempt the title received with the snippet is
    /// revealed; no further request is made for it.
    pub async fn submit_guess(&mut self, api: &dyn RoundApi, guess: &str) {
        if self.snippet.is_none() {
            self.error = Some(NO_SNIPPET.into());
            return;
        }
        if self.game_over || self.attempts_left == 0 {
            return;
        }
        if guess.trim().is_empty() {
            self.error = Some(EMPTY_GUESS.into());
            return;
        }

        let response = match api.check_guess(CheckGuessRequest::new(guess)).await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "check request failed");
                self.error = Some(CHECK_FAILED.into());
                return;
            }
        };

        if response.correct {
            self.result = Some(CORRECT_ANSWER.into());
            self.game_over = true;
            return;
        }

        self.attempts_left -= 1;
        if self.attempts_left == 0 {
            self.result = Some(format!(
                "Out of chances! The correct song was: \"{}\".",
                self.correct_title.as_deref().unwrap_or_default()
            ));
            self.game_over = true;
        } else {
            self.result = Some(format!(
                "Incorrect! {} attempts left.",
                self.attempts_left
            ));
        }
    }
}

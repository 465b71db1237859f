/// Songs rounds are drawn from.
pub mod catalog;
/// Current round and hint progress.
pub mod round;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::dao::text_generator::{GenerationError, GenerationResult, TextGenerator};

use self::{
    catalog::{Catalog, Song},
    round::{HintStage, Round},
};

/// Handle to [`AppState`] shared by every handler.
pub type SharedState = Arc<AppState>;

/// Central application state: the catalog, the text generator and the current round.
///
/// The game is single-player: every client shares the one current round, and
/// starting a round replaces it for everyone.
pub struct AppState {
    catalog: Catalog,
    generator: Option<Arc<dyn TextGenerator>>,
    round: RwLock<Option<Round>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// Without a generator the application runs in degraded mode: every
    /// generation fails with [`GenerationError::NotConfigured`].
    pub fn new(catalog: Catalog, generator: Option<Arc<dyn TextGenerator>>) -> SharedState {
        Arc::new(Self {
            catalog,
            generator,
            round: RwLock::new(None),
        })
    }

    /// Songs rounds are drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current degraded flag.
    pub fn is_degraded(&self) -> bool {
        self.generator.is_none()
    }

    /// Run `prompt` through the installed generator.
    pub async fn generate(&self, prompt: String) -> GenerationResult<String> {
        match &self.generator {
            Some(generator) => generator.generate(prompt).await,
            None => Err(GenerationError::NotConfigured),
        }
    }

    /// Replace the current round wholesale.
    pub async fn replace_round(&self, round: Round) {
        let mut slot = self.round.write().await;
        *slot = Some(round);
    }

    /// Song of the current round, if one was started.
    pub async fn current_song(&self) -> Option<Song> {
        let guard = self.round.read().await;
        guard.as_ref().map(|round| round.song().clone())
    }

    /// Grant the next hint of the current round, returning its song and the stage reached.
    pub async fn advance_hint(&self) -> Option<(Song, HintStage)> {
        let mut guard = self.round.write().await;
        let round = guard.as_mut()?;
        let stage = round.advance_hint();
        Some((round.song().clone(), stage))
    }

    /// Hint stage of the current round, if one was started.
    #[cfg(test)]
    pub(crate) async fn hint_stage(&self) -> Option<HintStage> {
        let guard = self.round.read().await;
        guard.as_ref().map(Round::hint_stage)
    }
}

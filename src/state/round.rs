use crate::state::catalog::Song;

/// Progress through the hints of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintStage {
    /// No hint has been granted yet.
    #[default]
    NotStarted,
    /// First word (or first letter) of the title was granted.
    FirstWord,
    /// Artist name was granted.
    Artist,
    /// Genre and theme description was granted.
    GenreTheme,
    /// Every hint was granted; further requests are refused.
    Exhausted,
}

impl HintStage {
    /// Stage reached by granting one more hint. `Exhausted` is absorbing.
    pub fn next(self) -> Self {
        match self {
            HintStage::NotStarted => HintStage::FirstWord,
            HintStage::FirstWord => HintStage::Artist,
            HintStage::Artist => HintStage::GenreTheme,
            HintStage::GenreTheme | HintStage::Exhausted => HintStage::Exhausted,
        }
    }
}

/// One play-through: the chosen song and the hints granted so far.
#[derive(Debug, Clone)]
pub struct Round {
    song: Song,
    hint_stage: HintStage,
}

impl Round {
    /// Start a round on `song` with no hint granted.
    pub fn new(song: Song) -> Self {
        Self {
            song,
            hint_stage: HintStage::NotStarted,
        }
    }

    /// Song players have to guess.
    pub fn song(&self) -> &Song {
        &self.song
    }

    /// Hints granted so far.
    #[cfg(test)]
    pub(crate) fn hint_stage(&self) -> HintStage {
        self.hint_stage
    }

    /// Grant the next hint and return the stage it corresponds to.
    pub fn advance_hint(&mut self) -> HintStage {
        self.hint_stage = self.hint_stage.next();
        self.hint_stage
    }
}

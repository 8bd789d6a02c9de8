use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionState {
    Idle,           // No round data
    Active,         // Round in progress
    RoundWon,       // Target word guessed
    RoundExhausted, // Every synonym revealed without a win
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active)
    }

    pub fn is_round_over(&self) -> bool {
        matches!(self, SessionState::RoundWon | SessionState::RoundExhausted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub word: String,
    pub round: u32,
    pub scored_at: String, // ISO 8601 string
}

/// Snapshot of a session handed to the front end.
/// The target word is only filled in once the round is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundView {
    pub state: SessionState,
    pub round_number: u32,
    pub part_of_speech: String,
    pub revealed_synonyms: Vec<String>,
    pub pending_highlight: Option<String>,
    pub remaining: u32,
    pub guesses: Vec<String>,
    pub score_log: Vec<ScoreEntry>,
    pub target_word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RevealOutcome {
    /// A new synonym was drawn
    Revealed { synonym: String, view: RoundView },
    /// The tick was spent showing the last close guess
    HighlightCleared { synonym: String, view: RoundView },
    /// Nothing left to reveal, the round is over
    Exhausted { view: RoundView },
}

impl RevealOutcome {
    pub fn view(&self) -> &RoundView {
        match self {
            RevealOutcome::Revealed { view, .. } => view,
            RevealOutcome::HighlightCleared { view, .. } => view,
            RevealOutcome::Exhausted { view } => view,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessOutcome {
    /// Guess matched a synonym that was still hidden
    CloseGuess { synonym: String, view: RoundView },
    /// Guess matched the target word
    Win { word: String, view: RoundView },
    WrongGuess { guess: String, view: RoundView },
}

impl GuessOutcome {
    pub fn view(&self) -> &RoundView {
        match self {
            GuessOutcome::CloseGuess { view, .. } => view,
            GuessOutcome::Win { view, .. } => view,
            GuessOutcome::WrongGuess { view, .. } => view,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuessOutcome::CloseGuess { .. } => "close",
            GuessOutcome::Win { .. } => "win",
            GuessOutcome::WrongGuess { .. } => "wrong",
        }
    }
}

use std::time::{Duration, Instant};

use rand::Rng;
use thesaurus_types::{
    GameError, GuessOutcome, RevealOutcome, RoundView, ScoreEntry, SessionState, WordBundle,
};

use crate::GuessValidator;

/// Per-player game state. The session is a plain value: callers own its
/// storage and serialize access to it.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    target_word: String,
    part_of_speech: String,
    all_synonyms: Vec<String>,
    revealed_synonyms: Vec<String>,
    pending_highlight: Option<String>,
    guesses: Vec<String>,
    round_number: u32,
    score_log: Vec<ScoreEntry>,
    last_activity: Instant,
    validator: GuessValidator,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            target_word: String::new(),
            part_of_speech: String::new(),
            all_synonyms: Vec::new(),
            revealed_synonyms: Vec::new(),
            pending_highlight: None,
            guesses: Vec::new(),
            round_number: 1,
            score_log: Vec::new(),
            last_activity: Instant::now(),
            validator: GuessValidator::new(),
        }
    }

    /// Load a word and make the round active. Round number and score log
    /// carry over from earlier rounds.
    pub fn begin_round(&mut self, bundle: WordBundle) {
        let (word, part_of_speech, synonyms) = bundle.into_parts();

        self.target_word = word;
        self.part_of_speech = part_of_speech;
        self.all_synonyms = synonyms;
        self.revealed_synonyms.clear();
        self.guesses.clear();
        self.pending_highlight = None;
        self.state = SessionState::Active;
        self.touch();
    }

    /// Advance the clue display by one tick
    pub fn reveal_next_clue<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<RevealOutcome, GameError> {
        self.require_active("reveal a clue")?;
        self.touch();

        // A close guess keeps the display for one extra tick
        if let Some(synonym) = self.pending_highlight.take() {
            return Ok(RevealOutcome::HighlightCleared {
                synonym,
                view: self.view(),
            });
        }

        let unrevealed: Vec<&String> = self
            .all_synonyms
            .iter()
            .filter(|synonym| !self.revealed_synonyms.contains(*synonym))
            .collect();

        if unrevealed.is_empty() {
            self.state = SessionState::RoundExhausted;
            return Ok(RevealOutcome::Exhausted { view: self.view() });
        }

        let synonym = unrevealed[rng.random_range(0..unrevealed.len())].clone();
        self.revealed_synonyms.push(synonym.clone());

        Ok(RevealOutcome::Revealed {
            synonym,
            view: self.view(),
        })
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        self.require_active("submit a guess")?;

        let guess = self
            .validator
            .normalize(text)
            .ok_or_else(|| GameError::InvalidInput {
                input: text.to_string(),
            })?;

        self.touch();
        self.guesses.push(guess.clone());

        if self.is_unrevealed_synonym(&guess) {
            self.revealed_synonyms.push(guess.clone());
            self.pending_highlight = Some(guess.clone());
            return Ok(GuessOutcome::CloseGuess {
                synonym: guess,
                view: self.view(),
            });
        }

        if self.validator.matches(&guess, &self.target_word) {
            self.score_log.push(ScoreEntry {
                word: self.target_word.clone(),
                round: self.round_number,
                scored_at: chrono::Utc::now().to_rfc3339(),
            });
            self.round_number += 1;
            self.state = SessionState::RoundWon;
            return Ok(GuessOutcome::Win {
                word: self.target_word.clone(),
                view: self.view(),
            });
        }

        Ok(GuessOutcome::WrongGuess {
            guess,
            view: self.view(),
        })
    }

    /// Discard everything, returning to `Idle`
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            state: self.state,
            round_number: self.round_number,
            part_of_speech: self.part_of_speech.clone(),
            revealed_synonyms: self.revealed_synonyms.clone(),
            pending_highlight: self.pending_highlight.clone(),
            remaining: self.remaining() as u32,
            guesses: self.guesses.clone(),
            score_log: self.score_log.clone(),
            target_word: self
                .state
                .is_round_over()
                .then(|| self.target_word.clone()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }

    pub fn all_synonyms(&self) -> &[String] {
        &self.all_synonyms
    }

    pub fn revealed_synonyms(&self) -> &[String] {
        &self.revealed_synonyms
    }

    pub fn pending_highlight(&self) -> Option<&str> {
        self.pending_highlight.as_deref()
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn score_log(&self) -> &[ScoreEntry] {
        &self.score_log
    }

    /// Synonyms not yet revealed
    pub fn remaining(&self) -> usize {
        self.all_synonyms.len() - self.revealed_synonyms.len()
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_activity.elapsed()
    }

    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.idle_for() > timeout
    }

    fn require_active(&self, operation: &str) -> Result<(), GameError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(GameError::invalid_transition(operation, self.state))
        }
    }

    fn is_unrevealed_synonym(&self, guess: &str) -> bool {
        self.all_synonyms.iter().any(|synonym| synonym == guess)
            && !self.revealed_synonyms.iter().any(|synonym| synonym == guess)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

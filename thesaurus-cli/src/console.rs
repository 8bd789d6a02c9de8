use std::sync::Arc;
use std::time::Duration;

use thesaurus_core::RoundController;
use thesaurus_types::{GameError, GuessOutcome, RevealOutcome, RoundView, SessionId};

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::session_store::SessionStore;

pub const HELP: &str = "Guess the word from its synonyms. Type a word to guess, \
:new for a new round, :reset to start over, :help for this message, :quit to leave.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    NewRound,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines are ignored.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line.to_lowercase().as_str() {
            ":new" | ":n" => Command::NewRound,
            ":reset" | ":r" => Command::Reset,
            ":help" | ":h" | ":?" => Command::Help,
            ":quit" | ":q" | ":exit" => Command::Quit,
            _ => Command::Guess(line.to_string()),
        };
        Some(command)
    }
}

/// One player's game driven from a terminal
pub struct ConsoleGame {
    controller: Arc<RoundController>,
    sessions: Arc<SessionStore>,
    session_id: SessionId,
}

impl ConsoleGame {
    pub fn new(controller: Arc<RoundController>, sessions: Arc<SessionStore>) -> Self {
        let session_id = sessions.create();
        Self {
            controller,
            sessions,
            session_id,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Run a command and return the text to print
    pub async fn execute(&self, command: Command) -> String {
        let session = self.sessions.get_or_create(self.session_id);
        let mut session = session.lock().await;

        match command {
            Command::Guess(text) => match self.controller.submit_guess(&mut session, &text) {
                Ok(outcome) => render_guess(&outcome),
                Err(GameError::InvalidTransition { .. }) => {
                    "No round in progress. Type :new to start one.".to_string()
                }
                Err(e) => e.to_string(),
            },
            Command::NewRound => match self.controller.start_round(&mut session).await {
                Ok(view) => render_round_start(&view),
                Err(e) => e.to_string(),
            },
            Command::Reset => {
                self.controller.reset(&mut session);
                "Session reset. Type :new to play.".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => "Goodbye!".to_string(),
        }
    }

    /// Advance the clue display. Returns nothing when no round is running.
    pub async fn tick(&self) -> Option<String> {
        let session = self.sessions.get_or_create(self.session_id);
        let mut session = session.lock().await;
        if !session.is_active() {
            return None;
        }

        self.controller
            .reveal_next_clue(&mut session)
            .ok()
            .map(|outcome| render_reveal(&outcome))
    }
}

/// Clue ticker whose first tick lands one `period` from now. Ticks missed
/// while a command blocks are delayed rather than fired in a burst.
pub fn clue_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

pub fn render_round_start(view: &RoundView) -> String {
    format!(
        "Round {}: guess the {} behind {} synonyms.",
        view.round_number, view.part_of_speech, view.remaining
    )
}

pub fn render_clues(view: &RoundView) -> String {
    let clues: Vec<String> = view
        .revealed_synonyms
        .iter()
        .map(|synonym| {
            if view.pending_highlight.as_deref() == Some(synonym.as_str()) {
                format!("*{}*", synonym)
            } else {
                synonym.clone()
            }
        })
        .collect();

    format!("Clues: {} ({} hidden)", clues.join(", "), view.remaining)
}

pub fn render_scores(view: &RoundView) -> String {
    if view.score_log.is_empty() {
        return "No words solved yet.".to_string();
    }
    let entries: Vec<String> = view
        .score_log
        .iter()
        .map(|entry| format!("round {}: {}", entry.round, entry.word))
        .collect();
    format!("Solved: {}", entries.join(", "))
}

pub fn render_reveal(outcome: &RevealOutcome) -> String {
    match outcome {
        RevealOutcome::Revealed { view, .. } | RevealOutcome::HighlightCleared { view, .. } => {
            render_clues(view)
        }
        RevealOutcome::Exhausted { view } => format!(
            "Game over! The word was '{}'. {} Type :new to play again.",
            view.target_word.as_deref().unwrap_or_default(),
            render_scores(view)
        ),
    }
}

pub fn render_guess(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::CloseGuess { synonym, view } => {
            format!("Close! '{}' is a synonym. {}", synonym, render_clues(view))
        }
        GuessOutcome::Win { word, view } => format!(
            "Correct! The word was '{}'. {} Type :new for the next round.",
            word,
            render_scores(view)
        ),
        GuessOutcome::WrongGuess { guess, .. } => format!("'{}' is not it.", guess),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thesaurus_types::{ScoreEntry, SessionState};

    fn view() -> RoundView {
        RoundView {
            state: SessionState::Active,
            round_number: 2,
            part_of_speech: "noun".to_string(),
            revealed_synonyms: vec!["exam".to_string(), "trial".to_string()],
            pending_highlight: Some("trial".to_string()),
            remaining: 3,
            guesses: vec!["trial".to_string()],
            score_log: vec![ScoreEntry {
                word: "happy".to_string(),
                round: 1,
                scored_at: "2024-01-01T00:00:00+00:00".to_string(),
            }],
            target_word: None,
        }
    }

    #[tokio::test]
    async fn test_clue_ticker_delays_missed_ticks() {
        let ticker = clue_ticker(Duration::from_secs(3));
        assert_eq!(ticker.missed_tick_behavior(), MissedTickBehavior::Delay);
        assert_eq!(ticker.period(), Duration::from_secs(3));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(":new"), Some(Command::NewRound));
        assert_eq!(Command::parse("  :RESET "), Some(Command::Reset));
        assert_eq!(Command::parse(":q"), Some(Command::Quit));
        assert_eq!(Command::parse(":help"), Some(Command::Help));
        assert_eq!(Command::parse("Trial"), Some(Command::Guess("Trial".to_string())));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_render_clues_marks_highlight() {
        assert_eq!(render_clues(&view()), "Clues: exam, *trial* (3 hidden)");
    }

    #[test]
    fn test_render_round_start() {
        assert_eq!(
            render_round_start(&view()),
            "Round 2: guess the noun behind 3 synonyms."
        );
    }

    #[test]
    fn test_render_win() {
        let outcome = GuessOutcome::Win {
            word: "test".to_string(),
            view: view(),
        };
        assert_eq!(
            render_guess(&outcome),
            "Correct! The word was 'test'. Solved: round 1: happy Type :new for the next round."
        );
    }

    #[test]
    fn test_render_exhausted() {
        let mut view = view();
        view.target_word = Some("test".to_string());
        view.score_log.clear();

        let text = render_reveal(&RevealOutcome::Exhausted { view });
        assert_eq!(
            text,
            "Game over! The word was 'test'. No words solved yet. Type :new to play again."
        );
    }
}

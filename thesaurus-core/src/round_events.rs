use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    RoundStarted {
        round: u32,
        part_of_speech: String,
        synonym_count: usize,
    },
    ClueRevealed {
        synonym: String,
        remaining: usize,
    },
    HighlightCleared {
        synonym: String,
    },
    GuessSubmitted {
        guess: String,
        outcome: &'static str,
    },
    RoundWon {
        word: String,
        round: u32,
    },
    RoundExhausted {
        word: String,
    },
    SessionReset,
}

impl RoundEvent {
    /// Whether this event ends the current round
    pub fn ends_round(&self) -> bool {
        matches!(self, RoundEvent::RoundWon { .. } | RoundEvent::RoundExhausted { .. })
    }
}

/// Event handler trait for observing round transitions
pub trait RoundEventHandler: Send + Sync {
    fn handle_event(&self, event: &RoundEvent);
}

/// Fan-out of round events to registered handlers
#[derive(Default)]
pub struct RoundEventBus {
    handlers: Vec<Box<dyn RoundEventHandler>>,
}

impl RoundEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&self, event: RoundEvent) {
        for handler in &self.handlers {
            handler.handle_event(&event);
        }
    }
}

/// Writes every event to the tracing log
pub struct LoggingHandler;

impl RoundEventHandler for LoggingHandler {
    fn handle_event(&self, event: &RoundEvent) {
        match event {
            RoundEvent::RoundStarted {
                round,
                part_of_speech,
                synonym_count,
            } => info!(round, %part_of_speech, synonym_count, "Round started"),
            RoundEvent::ClueRevealed { synonym, remaining } => {
                info!(%synonym, remaining, "Clue revealed")
            }
            RoundEvent::HighlightCleared { synonym } => info!(%synonym, "Highlight cleared"),
            RoundEvent::GuessSubmitted { guess, outcome } => {
                info!(%guess, %outcome, "Guess submitted")
            }
            RoundEvent::RoundWon { word, round } => info!(%word, round, "Round won"),
            RoundEvent::RoundExhausted { word } => info!(%word, "Round exhausted"),
            RoundEvent::SessionReset => info!("Session reset"),
        }
    }
}

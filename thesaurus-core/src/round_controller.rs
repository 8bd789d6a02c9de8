use std::sync::Arc;

use rand::Rng;
use thesaurus_types::{GameError, GuessOutcome, RevealOutcome, RoundView};
use tracing::{debug, warn};

use crate::{GameSession, RoundEvent, RoundEventBus, WordCache};

/// Drives session transitions, pulling words from the shared cache
pub struct RoundController {
    cache: Arc<WordCache>,
    low_water_mark: usize,
    refill_batch: usize,
    event_bus: RoundEventBus,
}

impl RoundController {
    pub fn new(cache: Arc<WordCache>, low_water_mark: usize, refill_batch: usize) -> Self {
        Self {
            cache,
            low_water_mark,
            refill_batch,
            event_bus: RoundEventBus::new(),
        }
    }

    pub fn with_event_bus(mut self, event_bus: RoundEventBus) -> Self {
        self.event_bus = event_bus;
        self
    }

    /// Start a new round from any state.
    ///
    /// On `SourceUnavailable` the session is left exactly as it was.
    pub async fn start_round(&self, session: &mut GameSession) -> Result<RoundView, GameError> {
        let bundle = match self.cache.try_take_one().await {
            Some(bundle) => {
                // Top the queue up in the background while it is low
                self.cache
                    .refill_if_low(self.low_water_mark, self.refill_batch)
                    .await;
                bundle
            }
            None => {
                debug!("Word cache empty, fetching inline");
                self.cache
                    .ensure_supply(self.low_water_mark, self.refill_batch)
                    .await?;
                self.cache.try_take_one().await.ok_or_else(|| {
                    warn!("Word cache drained before the round could start");
                    GameError::SourceUnavailable
                })?
            }
        };

        let synonym_count = bundle.synonym_count();
        session.begin_round(bundle);

        self.event_bus.publish(RoundEvent::RoundStarted {
            round: session.round_number(),
            part_of_speech: session.part_of_speech().to_string(),
            synonym_count,
        });

        Ok(session.view())
    }

    /// Reveal the next clue using the thread-local RNG
    pub fn reveal_next_clue(&self, session: &mut GameSession) -> Result<RevealOutcome, GameError> {
        self.reveal_next_clue_with(session, &mut rand::rng())
    }

    pub fn reveal_next_clue_with<R: Rng>(
        &self,
        session: &mut GameSession,
        rng: &mut R,
    ) -> Result<RevealOutcome, GameError> {
        let outcome = session.reveal_next_clue(rng)?;

        let event = match &outcome {
            RevealOutcome::Revealed { synonym, view } => RoundEvent::ClueRevealed {
                synonym: synonym.clone(),
                remaining: view.remaining as usize,
            },
            RevealOutcome::HighlightCleared { synonym, .. } => RoundEvent::HighlightCleared {
                synonym: synonym.clone(),
            },
            RevealOutcome::Exhausted { .. } => RoundEvent::RoundExhausted {
                word: session.target_word().to_string(),
            },
        };
        self.event_bus.publish(event);

        Ok(outcome)
    }

    pub fn submit_guess(
        &self,
        session: &mut GameSession,
        text: &str,
    ) -> Result<GuessOutcome, GameError> {
        let outcome = session.submit_guess(text)?;

        let guess = session.guesses().last().cloned().unwrap_or_default();
        self.event_bus.publish(RoundEvent::GuessSubmitted {
            guess,
            outcome: outcome.label(),
        });

        if let GuessOutcome::Win { word, view } = &outcome {
            let round = view.score_log.last().map(|entry| entry.round).unwrap_or_default();
            self.event_bus.publish(RoundEvent::RoundWon {
                word: word.clone(),
                round,
            });
        }

        Ok(outcome)
    }

    /// Clear the session. The word cache is untouched.
    pub fn reset(&self, session: &mut GameSession) -> RoundView {
        session.reset();
        self.event_bus.publish(RoundEvent::SessionReset);
        session.view()
    }
}

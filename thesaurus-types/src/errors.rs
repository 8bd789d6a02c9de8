use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("No word available right now, please retry")]
    SourceUnavailable,
    #[error("Guess '{input}' must contain letters only")]
    InvalidInput { input: String },
    #[error("Cannot {operation} while the session is {current_state:?}")]
    InvalidTransition {
        operation: String,
        current_state: SessionState,
    },
}

impl GameError {
    pub fn invalid_transition(operation: &str, current_state: SessionState) -> Self {
        GameError::InvalidTransition {
            operation: operation.to_string(),
            current_state,
        }
    }

    /// Whether the caller may simply try the same operation again
    pub fn is_retryable(&self) -> bool {
        matches!(self, GameError::SourceUnavailable)
    }
}

/// Failure reported by a word source. Every failure is a retryable miss.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Word source unavailable: {reason}")]
    Unavailable { reason: String },
}

impl SourceError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        SourceError::Unavailable {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    #[error("Word is empty")]
    EmptyWord,
    #[error("Word '{word}' has {found} synonyms, {required} required")]
    TooFewSynonyms {
        word: String,
        found: usize,
        required: usize,
    },
}

impl From<BundleError> for SourceError {
    fn from(error: BundleError) -> Self {
        SourceError::unavailable(error.to_string())
    }
}

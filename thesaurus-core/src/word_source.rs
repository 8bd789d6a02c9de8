use async_trait::async_trait;
use thesaurus_types::{SourceError, WordBundle};

/// Supplier of candidate words, usually backed by a remote synonym API.
///
/// Implementations must be safe to call concurrently. Callers treat every
/// failure as a retryable miss, so no structured reason is required beyond
/// what is useful for logging.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Return a word with at least `min_synonyms` synonyms
    async fn fetch_candidate(&self, min_synonyms: usize) -> Result<WordBundle, SourceError>;
}

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::stream::{FuturesUnordered, StreamExt};
use thesaurus_types::{DEFAULT_MIN_SYNONYMS, GameError, WordBundle};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{TaskSpawner, WordSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    pub min_synonyms: usize,        // Words below this are never queued
    pub sync_attempts: u32,         // Retry budget when the queue is empty
    pub overfetch_multiplier: usize, // Fetch attempts per wanted word in a refill
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            min_synonyms: DEFAULT_MIN_SYNONYMS,
            sync_attempts: 10,
            overfetch_multiplier: 4,
        }
    }
}

struct CacheInner {
    queue: Mutex<VecDeque<WordBundle>>,
    source: Arc<dyn WordSource>,
    settings: CacheSettings,
    refill_in_flight: AtomicBool,
}

/// Clears the in-flight flag when a background refill ends or is dropped
struct RefillGuard(Arc<CacheInner>);

impl Drop for RefillGuard {
    fn drop(&mut self) {
        self.0.refill_in_flight.store(false, Ordering::Release);
    }
}

impl CacheInner {
    fn accepts(&self, bundle: &WordBundle) -> bool {
        bundle.synonym_count() >= self.settings.min_synonyms
    }

    async fn fetch_with_retries(&self) -> Result<WordBundle, GameError> {
        for attempt in 1..=self.settings.sync_attempts {
            match self.source.fetch_candidate(self.settings.min_synonyms).await {
                Ok(bundle) if self.accepts(&bundle) => return Ok(bundle),
                Ok(bundle) => {
                    debug!(
                        attempt,
                        word = bundle.word(),
                        synonyms = bundle.synonym_count(),
                        "Word below synonym threshold"
                    );
                }
                Err(e) => debug!(attempt, "Word fetch failed: {}", e),
            }
        }

        warn!(
            attempts = self.settings.sync_attempts,
            "Word source exhausted its retry budget"
        );
        Err(GameError::SourceUnavailable)
    }

    fn refill_attempts(&self, refill_batch: usize) -> usize {
        refill_batch.saturating_mul(self.settings.overfetch_multiplier.max(1))
    }

    async fn refill(&self, refill_batch: usize) -> usize {
        if refill_batch == 0 {
            return 0;
        }

        let attempts = self.refill_attempts(refill_batch);
        let mut pending: FuturesUnordered<_> = (0..attempts)
            .map(|_| self.source.fetch_candidate(self.settings.min_synonyms))
            .collect();

        let mut seen = HashSet::new();
        let mut fetched = Vec::with_capacity(refill_batch);
        let mut misses = 0usize;

        while let Some(result) = pending.next().await {
            match result {
                Ok(bundle) if !self.accepts(&bundle) => misses += 1,
                Ok(bundle) => {
                    if seen.insert(bundle.word().to_string()) {
                        fetched.push(bundle);
                        if fetched.len() >= refill_batch {
                            break;
                        }
                    }
                }
                Err(e) => {
                    debug!("Refill fetch attempt failed: {}", e);
                    misses += 1;
                }
            }
        }

        if fetched.is_empty() {
            warn!(attempts, "Background refill produced no words");
            return 0;
        }

        let mut queue = self.queue.lock().await;
        let before = queue.len();
        for bundle in fetched {
            if !queue.iter().any(|queued| queued.word() == bundle.word()) {
                queue.push_back(bundle);
            }
        }
        let added = queue.len() - before;

        info!(added, queued = queue.len(), misses, "Background refill complete");
        added
    }
}

/// Shared FIFO of ready-to-play words that hides word source latency.
///
/// The queue lock is never held across a word source call.
pub struct WordCache {
    inner: Arc<CacheInner>,
    spawner: Arc<dyn TaskSpawner>,
}

impl WordCache {
    pub fn new(
        source: Arc<dyn WordSource>,
        spawner: Arc<dyn TaskSpawner>,
        settings: CacheSettings,
    ) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                queue: Mutex::new(VecDeque::new()),
                source,
                settings,
                refill_in_flight: AtomicBool::new(false),
            }),
            spawner,
        }
    }

    /// Pop the oldest queued word without waiting for a refill
    pub async fn try_take_one(&self) -> Option<WordBundle> {
        self.inner.queue.lock().await.pop_front()
    }

    /// Make sure a round can start.
    ///
    /// An empty queue gets one word fetched inline (up to the retry budget)
    /// followed by a background refill. A queue at or below `low_water_mark`
    /// only gets the background refill.
    pub async fn ensure_supply(
        &self,
        low_water_mark: usize,
        refill_batch: usize,
    ) -> Result<(), GameError> {
        let size = self.inner.queue.lock().await.len();

        if size == 0 {
            let bundle = self.inner.fetch_with_retries().await?;
            debug!(word = bundle.word(), "Fetched word inline");
            self.inner.queue.lock().await.push_back(bundle);
            self.schedule_refill(refill_batch);
        } else if size <= low_water_mark {
            self.schedule_refill(refill_batch);
        }

        Ok(())
    }

    /// Schedule a background refill when the queue is at or below
    /// `low_water_mark`, never fetching inline. Returns whether one was scheduled.
    pub async fn refill_if_low(&self, low_water_mark: usize, refill_batch: usize) -> bool {
        let size = self.inner.queue.lock().await.len();
        size <= low_water_mark && self.schedule_refill(refill_batch)
    }

    /// Hand a detached refill of `refill_batch` words to the spawner.
    ///
    /// At most one background refill runs at a time; returns false when one
    /// is already in flight.
    pub fn schedule_refill(&self, refill_batch: usize) -> bool {
        if self
            .inner
            .refill_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(refill_batch, "Background refill already in flight");
            return false;
        }

        let guard = RefillGuard(self.inner.clone());
        debug!(refill_batch, "Scheduling background refill");
        self.spawner.spawn(Box::pin(async move {
            guard.0.refill(refill_batch).await;
            drop(guard);
        }));
        true
    }

    /// Run a refill in place, returning how many words were appended
    pub async fn refill(&self, refill_batch: usize) -> usize {
        self.inner.refill(refill_batch).await
    }

    pub async fn len(&self) -> usize {
        self.inner.queue.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.queue.lock().await.is_empty()
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thesaurus_core::{
    CacheSettings, RoundController, RoundEvent, RoundEventBus, RoundEventHandler, TaskSpawner,
    WordCache, WordSource,
};
use thesaurus_types::{SourceError, WordBundle};

/// Creates a test bundle with five generated synonyms
pub fn bundle(word: &str) -> WordBundle {
    let synonyms: Vec<String> = (1..=5).map(|i| format!("{}syn{}", word, i)).collect();
    WordBundle::new(word, "noun", synonyms, 5).unwrap()
}

/// The bundle from the reference game walkthrough
pub fn test_bundle() -> WordBundle {
    WordBundle::new(
        "test",
        "noun",
        vec!["exam", "trial", "assessment", "evaluation", "examination"],
        5,
    )
    .unwrap()
}

/// Word source that replays a script of results, then reports unavailable
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<WordBundle, SourceError>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<WordBundle, SourceError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_words(words: &[&str]) -> Self {
        Self::new(words.iter().map(|word| Ok(bundle(word))).collect())
    }

    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn push(&self, result: Result<WordBundle, SourceError>) {
        self.script.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordSource for ScriptedSource {
    async fn fetch_candidate(&self, _min_synonyms: usize) -> Result<WordBundle, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::unavailable("script exhausted")))
    }
}

/// Spawner stand-in that holds tasks until the test runs them
#[derive(Default)]
pub struct QueuedSpawner {
    tasks: Mutex<Vec<BoxFuture<'static, ()>>>,
    spawned: AtomicUsize,
}

impl QueuedSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawned(&self) -> usize {
        self.spawned.load(Ordering::SeqCst)
    }

    pub fn pending(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Run every queued task to completion, in spawn order
    pub async fn run_pending(&self) {
        let tasks = std::mem::take(&mut *self.tasks.lock().unwrap());
        for task in tasks {
            task.await;
        }
    }
}

impl TaskSpawner for QueuedSpawner {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self.spawned.fetch_add(1, Ordering::SeqCst);
        self.tasks.lock().unwrap().push(task);
    }
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<RoundEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<RoundEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&RoundEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl RoundEventHandler for EventCollector {
    fn handle_event(&self, event: &RoundEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub struct TestSetup {
    pub source: Arc<ScriptedSource>,
    pub spawner: Arc<QueuedSpawner>,
    pub cache: Arc<WordCache>,
}

impl TestSetup {
    pub fn new(source: ScriptedSource) -> Self {
        Self::with_settings(source, CacheSettings::default())
    }

    pub fn with_settings(source: ScriptedSource, settings: CacheSettings) -> Self {
        let source = Arc::new(source);
        let spawner = Arc::new(QueuedSpawner::new());
        let cache = Arc::new(WordCache::new(source.clone(), spawner.clone(), settings));
        Self {
            source,
            spawner,
            cache,
        }
    }

    /// Controller with low-water mark 2 and refill batch 3
    pub fn controller(&self) -> (RoundController, EventCollector) {
        let collector = EventCollector::new();
        let mut bus = RoundEventBus::new();
        bus.add_handler(Box::new(collector.clone()));
        let controller = RoundController::new(self.cache.clone(), 2, 3).with_event_bus(bus);
        (controller, collector)
    }
}

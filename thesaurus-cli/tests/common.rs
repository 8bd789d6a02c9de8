#![allow(dead_code)]

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thesaurus_cli::console::ConsoleGame;
use thesaurus_cli::session_store::SessionStore;
use thesaurus_core::{CacheSettings, RoundController, TaskSpawner, WordCache, WordSource};
use thesaurus_types::{SourceError, WordBundle};

/// Word source that hands out a fixed list of words in order
pub struct ListSource {
    words: Mutex<VecDeque<WordBundle>>,
}

impl ListSource {
    pub fn new(words: Vec<WordBundle>) -> Self {
        Self {
            words: Mutex::new(words.into()),
        }
    }
}

#[async_trait]
impl WordSource for ListSource {
    async fn fetch_candidate(&self, _min_synonyms: usize) -> Result<WordBundle, SourceError> {
        self.words
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SourceError::unavailable("no more words"))
    }
}

/// Drops background work, keeping tests deterministic
pub struct NoopSpawner;

impl TaskSpawner for NoopSpawner {
    fn spawn(&self, _task: BoxFuture<'static, ()>) {}
}

pub fn test_bundle() -> WordBundle {
    WordBundle::new(
        "test",
        "noun",
        vec!["exam", "trial", "assessment", "evaluation", "examination"],
        5,
    )
    .unwrap()
}

pub fn happy_bundle() -> WordBundle {
    WordBundle::new(
        "happy",
        "adjective",
        vec!["glad", "joyful", "cheerful", "content", "merry"],
        5,
    )
    .unwrap()
}

pub struct TestConsoleSetup {
    pub sessions: Arc<SessionStore>,
    pub cache: Arc<WordCache>,
    pub game: ConsoleGame,
}

impl TestConsoleSetup {
    pub fn new(words: Vec<WordBundle>) -> Self {
        let cache = Arc::new(WordCache::new(
            Arc::new(ListSource::new(words)),
            Arc::new(NoopSpawner),
            CacheSettings {
                sync_attempts: 2,
                ..CacheSettings::default()
            },
        ));
        let controller = Arc::new(RoundController::new(cache.clone(), 2, 3));
        let sessions = Arc::new(SessionStore::new());
        let game = ConsoleGame::new(controller, sessions.clone());
        Self {
            sessions,
            cache,
            game,
        }
    }
}

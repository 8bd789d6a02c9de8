use std::sync::Arc;

use dashmap::DashMap;
use thesaurus_core::{GameSession, SessionCleanup};
use thesaurus_types::SessionId;
use tokio::sync::Mutex;
use uuid::Uuid;

pub type SharedSession = Arc<Mutex<GameSession>>;

/// Sessions keyed by id. Each session has its own lock so concurrent
/// requests for one player are serialized.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, SharedSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn create(&self) -> SessionId {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(Mutex::new(GameSession::new())));
        id
    }

    pub fn get(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// Fetch a session, creating a fresh one if it was never created or
    /// has been cleaned up
    pub fn get_or_create(&self, id: SessionId) -> SharedSession {
        self.sessions
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(GameSession::new())))
            .value()
            .clone()
    }

    pub fn remove(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop idle sessions, returning how many were removed.
    /// Sessions locked by an in-flight request are always kept.
    pub fn cleanup_expired(&self, cleanup: &SessionCleanup) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => !cleanup.should_cleanup_session(&session),
            Err(_) => true,
        });
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            tracing::info!("Cleaned up {} idle sessions", removed);
        }
        removed
    }
}

use crate::GameSession;
use std::time::Duration;

pub struct SessionCleanup {
    pub idle_threshold: Duration, // 30 minutes without a request
}

impl Default for SessionCleanup {
    fn default() -> Self {
        Self {
            idle_threshold: Duration::from_secs(1800),
        }
    }
}

impl SessionCleanup {
    pub fn new(idle_threshold: Duration) -> Self {
        Self { idle_threshold }
    }

    /// Check if a session should be discarded
    pub fn should_cleanup_session(&self, session: &GameSession) -> bool {
        session.is_expired(self.idle_threshold)
    }
}

use std::env;
use std::time::Duration;

use thesaurus_core::CacheSettings;

#[derive(Debug, Clone)]
pub struct Config {
    pub words_api_key: String,
    pub words_api_host: String,
    pub words_api_base_url: String,
    pub words_api_timeout_seconds: u64,
    pub min_synonyms: usize,
    pub low_water_mark: usize,
    pub refill_batch: usize,
    pub sync_fetch_attempts: u32,
    pub overfetch_multiplier: usize,
    pub clue_interval_seconds: u64,
    pub session_idle_minutes: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            words_api_key: env::var("WORDS_API_KEY").unwrap_or_default(),
            words_api_host: env::var("WORDS_API_HOST")
                .unwrap_or_else(|_| "wordsapiv1.p.rapidapi.com".to_string()),
            words_api_base_url: env::var("WORDS_API_BASE_URL")
                .unwrap_or_else(|_| "https://wordsapiv1.p.rapidapi.com".to_string()),
            words_api_timeout_seconds: env::var("WORDS_API_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid WORDS_API_TIMEOUT_SECONDS"),
            min_synonyms: env::var("MIN_SYNONYMS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("Invalid MIN_SYNONYMS"),
            low_water_mark: env::var("LOW_WATER_MARK")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("Invalid LOW_WATER_MARK"),
            refill_batch: env::var("REFILL_BATCH")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid REFILL_BATCH"),
            sync_fetch_attempts: env::var("SYNC_FETCH_ATTEMPTS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid SYNC_FETCH_ATTEMPTS"),
            overfetch_multiplier: env::var("OVERFETCH_MULTIPLIER")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .expect("Invalid OVERFETCH_MULTIPLIER"),
            clue_interval_seconds: env::var("CLUE_INTERVAL_SECONDS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .expect("Invalid CLUE_INTERVAL_SECONDS"),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("Invalid SESSION_IDLE_MINUTES"),
        }
    }

    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            min_synonyms: self.min_synonyms,
            sync_attempts: self.sync_fetch_attempts,
            overfetch_multiplier: self.overfetch_multiplier,
        }
    }

    pub fn words_api_timeout(&self) -> Duration {
        Duration::from_secs(self.words_api_timeout_seconds)
    }

    pub fn clue_interval(&self) -> Duration {
        Duration::from_secs(self.clue_interval_seconds.max(1))
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes * 60)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

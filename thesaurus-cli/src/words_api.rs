use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thesaurus_core::WordSource;
use thesaurus_types::{SourceError, WordBundle};

use crate::config::Config;

#[derive(Debug, Clone, Deserialize)]
pub struct WordResponse {
    pub word: String,
    #[serde(default)]
    pub results: Vec<WordDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetails {
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl WordResponse {
    /// Build a bundle from the first definition that still has enough
    /// synonyms once normalized
    pub fn into_bundle(self, min_synonyms: usize) -> Result<WordBundle, SourceError> {
        let mut last_error = None;
        for details in &self.results {
            let part_of_speech = details.part_of_speech.as_deref().unwrap_or("unknown");
            match WordBundle::new(&self.word, part_of_speech, &details.synonyms, min_synonyms) {
                Ok(bundle) => return Ok(bundle),
                Err(e) => last_error = Some(e),
            }
        }

        Err(match last_error {
            Some(e) => e.into(),
            None => SourceError::unavailable(format!("'{}' has no definitions", self.word)),
        })
    }
}

/// Random-word client for a WordsAPI compatible service
pub struct WordsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl WordsApiClient {
    pub fn new(
        base_url: String,
        api_key: String,
        api_host: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            api_host,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.words_api_base_url.clone(),
            config.words_api_key.clone(),
            config.words_api_host.clone(),
            config.words_api_timeout(),
        )
    }

    pub fn random_word_url(&self) -> String {
        format!("{}/words/?random=true&hasDetails=synonyms", self.base_url)
    }

    /// Parse a response body into a playable bundle
    pub fn parse_candidate(body: &str, min_synonyms: usize) -> Result<WordBundle, SourceError> {
        let response: WordResponse = serde_json::from_str(body)
            .map_err(|e| SourceError::unavailable(format!("Malformed word response: {}", e)))?;
        response.into_bundle(min_synonyms)
    }
}

#[async_trait]
impl WordSource for WordsApiClient {
    async fn fetch_candidate(&self, min_synonyms: usize) -> Result<WordBundle, SourceError> {
        let response = self
            .client
            .get(self.random_word_url())
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Word request failed: {}", e);
                SourceError::unavailable(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("Word service returned {}", status);
            return Err(SourceError::unavailable(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::unavailable(e.to_string()))?;

        Self::parse_candidate(&body, min_synonyms).inspect_err(|e| {
            tracing::debug!("Skipping word candidate: {}", e);
        })
    }
}

use serde::Serialize;
use ts_rs::TS;

use crate::BundleError;

/// Minimum number of synonyms a word needs before it can be played
pub const DEFAULT_MIN_SYNONYMS: usize = 5;

/// A playable word: the target, its part of speech and its synonyms.
///
/// Bundles are immutable once built. The word and synonyms are stored lower
/// case, synonyms are unique and never equal to the word itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct WordBundle {
    word: String,
    part_of_speech: String,
    synonyms: Vec<String>,
}

impl WordBundle {
    /// Build a bundle, rejecting it when fewer than `min_synonyms` usable
    /// synonyms remain after normalization
    pub fn new<I, S>(
        word: &str,
        part_of_speech: &str,
        synonyms: I,
        min_synonyms: usize,
    ) -> Result<Self, BundleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(BundleError::EmptyWord);
        }

        let mut unique: Vec<String> = Vec::new();
        for synonym in synonyms {
            let synonym = synonym.as_ref().trim().to_lowercase();
            if synonym.is_empty() || synonym == word || unique.contains(&synonym) {
                continue;
            }
            unique.push(synonym);
        }

        if unique.len() < min_synonyms {
            return Err(BundleError::TooFewSynonyms {
                word,
                found: unique.len(),
                required: min_synonyms,
            });
        }

        Ok(Self {
            word,
            part_of_speech: part_of_speech.trim().to_lowercase(),
            synonyms: unique,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn part_of_speech(&self) -> &str {
        &self.part_of_speech
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }

    /// Split the bundle into its parts
    pub fn into_parts(self) -> (String, String, Vec<String>) {
        (self.word, self.part_of_speech, self.synonyms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam_synonyms() -> Vec<&'static str> {
        vec!["exam", "trial", "assessment", "evaluation", "examination"]
    }

    #[test]
    fn test_bundle_creation() {
        let bundle = WordBundle::new("test", "noun", exam_synonyms(), 5).unwrap();

        assert_eq!(bundle.word(), "test");
        assert_eq!(bundle.part_of_speech(), "noun");
        assert_eq!(bundle.synonym_count(), 5);
        assert_eq!(bundle.synonyms()[0], "exam");
    }

    #[test]
    fn test_bundle_normalizes_case_and_whitespace() {
        let bundle = WordBundle::new(
            "  Test ",
            "Noun",
            vec!["EXAM", " Trial", "assessment ", "Evaluation", "examination"],
            5,
        )
        .unwrap();

        assert_eq!(bundle.word(), "test");
        assert_eq!(bundle.part_of_speech(), "noun");
        assert_eq!(
            bundle.synonyms(),
            &["exam", "trial", "assessment", "evaluation", "examination"]
        );
    }

    #[test]
    fn test_bundle_drops_duplicates_and_self_references() {
        let result = WordBundle::new(
            "test",
            "noun",
            vec!["exam", "Exam", "test", "trial", "", "assessment", "evaluation"],
            5,
        );

        // Only four usable synonyms survive
        match result {
            Err(BundleError::TooFewSynonyms { word, found, required }) => {
                assert_eq!(word, "test");
                assert_eq!(found, 4);
                assert_eq!(required, 5);
            }
            other => panic!("Expected TooFewSynonyms, got {:?}", other),
        }
    }

    #[test]
    fn test_bundle_rejects_too_few_synonyms() {
        let result = WordBundle::new("test", "noun", vec!["exam"], DEFAULT_MIN_SYNONYMS);
        assert!(matches!(result, Err(BundleError::TooFewSynonyms { found: 1, .. })));
    }

    #[test]
    fn test_bundle_rejects_empty_word() {
        let result = WordBundle::new("   ", "noun", exam_synonyms(), 5);
        assert_eq!(result, Err(BundleError::EmptyWord));
    }

    #[test]
    fn test_into_parts() {
        let bundle = WordBundle::new("test", "noun", exam_synonyms(), 5).unwrap();
        let (word, part_of_speech, synonyms) = bundle.into_parts();

        assert_eq!(word, "test");
        assert_eq!(part_of_speech, "noun");
        assert_eq!(synonyms.len(), 5);
    }
}

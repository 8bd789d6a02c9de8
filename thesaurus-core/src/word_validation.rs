/// Checks and normalizes player guesses
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessValidator;

impl GuessValidator {
    pub fn new() -> Self {
        Self
    }

    /// Case-fold a guess, returning `None` when it is not a plain word.
    /// Surrounding whitespace is ignored.
    pub fn normalize(&self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || !self.is_alphabetic(trimmed) {
            return None;
        }
        Some(trimmed.to_lowercase())
    }

    /// Check if word contains only alphabetic characters
    pub fn is_alphabetic(&self, word: &str) -> bool {
        word.chars().all(|c| c.is_alphabetic())
    }

    /// Case-insensitive comparison used for target and synonym matching
    pub fn matches(&self, guess: &str, word: &str) -> bool {
        guess.to_lowercase() == word.to_lowercase()
    }
}

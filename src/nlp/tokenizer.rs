//! Review tokenization
//!
//! Lowercases, deletes ASCII punctuation, splits on whitespace, and
//! filters stopwords and short tokens. Deliberately not Unicode-aware
//! beyond lowercasing: the punctuation set is the fixed ASCII one. No
//! stemming or lemmatization.

use crate::lexicon::StopwordFilter;

/// Tokenizer for review text
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Stopword membership filter
    stopwords: StopwordFilter,
    /// Shortest token kept, in chars
    min_token_length: usize,
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::new(),
            min_token_length: 3,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize text into filtered, normalized words.
    ///
    /// Pure function of its input: lowercase, delete every ASCII
    /// punctuation character, split on whitespace runs, then drop
    /// stopwords and tokens shorter than the minimum length.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped: String = lowered
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        stripped
            .split_whitespace()
            .filter(|word| !self.stopwords.is_stopword(word))
            .filter(|word| word.chars().count() >= self.min_token_length)
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Excellent!!! Truly GREAT.");

        assert_eq!(tokens, vec!["excellent", "truly", "great"]);
    }

    #[test]
    fn test_stopwords_removed() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("This movie was the best");

        // "this", "was", "the" are stopwords; "movie", "best" survive.
        assert_eq!(tokens, vec!["movie", "best"]);
    }

    #[test]
    fn test_short_tokens_removed() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("go ok fine acting");

        assert_eq!(tokens, vec!["fine", "acting"]);
    }

    #[test]
    fn test_punctuation_deleted_not_split() {
        let tokenizer = Tokenizer::new();

        // Deletion joins the pieces: "sci-fi" becomes "scifi".
        assert_eq!(tokenizer.tokenize("sci-fi"), vec!["scifi"]);
        assert_eq!(tokenizer.tokenize("don't"), vec!["dont"]);
    }

    #[test]
    fn test_custom_min_length() {
        let tokenizer = Tokenizer::new().with_min_length(5);
        let tokens = tokenizer.tokenize("epic masterpiece wins");

        assert_eq!(tokens, vec!["masterpiece"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let tokenizer = Tokenizer::new();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_all_filtered() {
        let tokenizer = Tokenizer::new();

        // Every word is a stopword or too short after filtering.
        assert!(tokenizer.tokenize("it was so so").is_empty());
    }
}

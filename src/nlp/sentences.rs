//! Sentence splitting
//!
//! Splits review text on runs of sentence-ending punctuation and drops
//! fragments too short to score meaningfully.

/// Splits text into scorable sentence fragments
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    /// Shortest fragment kept after trimming, in chars
    min_chars: usize,
}

impl SentenceSplitter {
    /// Create a splitter with the default length floor
    pub fn new() -> Self {
        Self { min_chars: 11 }
    }

    /// Set the minimum fragment length
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Split on runs of `.`, `!`, `?`; trim each fragment; keep those at
    /// least `min_chars` long. Fragment order follows the source text.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(['.', '!', '?'])
            .map(str::trim)
            .filter(|fragment| fragment.chars().count() >= self.min_chars)
            .collect()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

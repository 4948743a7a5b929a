//! Keyword analysis
//!
//! Builds the word-frequency table and intersects it with the polarity,
//! emotion, and genre lexicons.

use crate::lexicon::{EmotionCategory, GenreCategory, PolarityLexicon};
use crate::nlp::Tokenizer;
use crate::types::{AnalyzerConfig, EmotionMatch, FrequencyTable, GenreMatch, KeywordAnalysis};

/// Extracts the keyword-level breakdown of a review
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    tokenizer: Tokenizer,
    polarity: PolarityLexicon,
    /// Words surfaced in `word_frequency`
    top_n: usize,
}

impl KeywordAnalyzer {
    /// Create an analyzer with default settings
    pub fn new() -> Self {
        Self::with_config(&AnalyzerConfig::default())
    }

    /// Create an analyzer from a config
    pub fn with_config(config: &AnalyzerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new().with_min_length(config.min_token_length),
            polarity: PolarityLexicon::new(),
            top_n: config.top_keywords,
        }
    }

    /// Analyze a review's keywords.
    ///
    /// Empty or fully filtered input yields [`KeywordAnalysis::empty`].
    pub fn analyze(&self, text: &str) -> KeywordAnalysis {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return KeywordAnalysis::empty();
        }

        let mut table = FrequencyTable::new();
        for token in &tokens {
            table.add(token);
        }

        // Word lists keep the table's first-encounter order.
        let positive_words = table
            .iter()
            .filter(|(word, _)| self.polarity.is_positive(word))
            .map(|(word, count)| (word.to_string(), count))
            .collect();

        let negative_words = table
            .iter()
            .filter(|(word, _)| self.polarity.is_negative(word))
            .map(|(word, count)| (word.to_string(), count))
            .collect();

        let emotions = EmotionCategory::ALL
            .iter()
            .filter_map(|&category| {
                let words = matched_triggers(&table, category.trigger_words());
                (!words.is_empty()).then(|| EmotionMatch { category, words })
            })
            .collect();

        let genres = GenreCategory::ALL
            .iter()
            .filter_map(|&category| {
                let words = matched_triggers(&table, category.trigger_words());
                (!words.is_empty()).then(|| GenreMatch { category, words })
            })
            .collect();

        KeywordAnalysis {
            word_frequency: table.top_n(self.top_n),
            positive_words,
            negative_words,
            emotions,
            genres,
            total_words: tokens.len(),
        }
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Trigger words present in the table, in lexicon-defined order
fn matched_triggers(table: &FrequencyTable, triggers: &[&str]) -> Vec<String> {
    triggers
        .iter()
        .filter(|word| table.contains(word))
        .map(|word| word.to_string())
        .collect()
}

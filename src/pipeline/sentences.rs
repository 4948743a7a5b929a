//! Per-sentence sentiment
//!
//! Splits the review into fragments and scores each one independently
//! with the polarity scorer.

use crate::errors::Result;
use crate::nlp::SentenceSplitter;
use crate::scorer::PolarityScorer;
use crate::types::{AnalyzerConfig, SentenceSentiment, SentimentLabel};

/// Scores each sentence of a review on its own
#[derive(Debug, Clone)]
pub struct SentenceAnalyzer {
    splitter: SentenceSplitter,
}

impl SentenceAnalyzer {
    /// Create an analyzer with default settings
    pub fn new() -> Self {
        Self::with_config(&AnalyzerConfig::default())
    }

    /// Create an analyzer from a config
    pub fn with_config(config: &AnalyzerConfig) -> Self {
        Self {
            splitter: SentenceSplitter::new().with_min_chars(config.min_sentence_length),
        }
    }

    /// Score every surviving fragment.
    ///
    /// Positions are 1-based over the filtered fragments: dropped short
    /// fragments leave no gaps in the numbering. Scorer errors
    /// propagate immediately.
    pub fn analyze<S: PolarityScorer>(
        &self,
        text: &str,
        scorer: &S,
    ) -> Result<Vec<SentenceSentiment>> {
        let mut records = Vec::new();

        for (i, fragment) in self.splitter.split(text).into_iter().enumerate() {
            let scores = scorer.polarity_scores(fragment)?;

            records.push(SentenceSentiment {
                text: fragment.to_string(),
                sentiment: SentimentLabel::from_compound(scores.compound),
                compound: scores.compound,
                position: i + 1,
            });
        }

        Ok(records)
    }
}

impl Default for SentenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

//! Core types for cinelex
//!
//! This module defines the fundamental data structures used throughout the
//! library: sentiment scores and labels, the insertion-ordered frequency
//! table, per-request result bundles, and configuration.

use crate::errors::{CinelexError, Result};
use crate::lexicon::{EmotionCategory, GenreCategory};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentiment score
// ============================================================================

/// Raw polarity scores for a span of text (whole review or one sentence).
///
/// Produced fresh per analyzed span by a [`PolarityScorer`] and never
/// cached. `compound` is the normalized summary in `[-1, 1]`; `pos`,
/// `neu`, and `neg` are the proportions of positive, neutral, and
/// negative token mass.
///
/// [`PolarityScorer`]: crate::scorer::PolarityScorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Normalized overall polarity in `[-1, 1]`
    pub compound: f64,
    /// Positive proportion
    pub pos: f64,
    /// Neutral proportion
    pub neu: f64,
    /// Negative proportion
    pub neg: f64,
}

impl SentimentScore {
    /// An all-zero score, used for spans with no scorable content
    pub fn zero() -> Self {
        Self {
            compound: 0.0,
            pos: 0.0,
            neu: 0.0,
            neg: 0.0,
        }
    }
}

// ============================================================================
// Sentiment labels
// ============================================================================

/// Coarse 3-way sentiment classification.
///
/// Uses the ±0.05 compound thresholds. `Display` renders the
/// emoji-prefixed form shown to readers ("😊 Positive").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a compound score: `>= 0.05` is positive, `<= -0.05` is
    /// negative, everything between is neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            SentimentLabel::Positive
        } else if compound <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// The plain label name
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// The emoji shown next to the label
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😠",
            SentimentLabel::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.as_str())
    }
}

/// 7-way sentiment intensity classification.
///
/// This is a separate, finer mapping than [`SentimentLabel`]; the two
/// coexist and are intentionally not unified. Interval boundaries:
///
/// | compound | label |
/// |---|---|
/// | `>= 0.75` | Very Strong Positive |
/// | `[0.5, 0.75)` | Strong Positive |
/// | `[0.05, 0.5)` | Moderate Positive |
/// | `(-0.05, 0.05)` | Neutral |
/// | `(-0.5, -0.05]` | Moderate Negative |
/// | `(-0.75, -0.5]` | Strong Negative |
/// | `<= -0.75` | Very Strong Negative |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentStrength {
    VeryStrongPositive,
    StrongPositive,
    ModeratePositive,
    Neutral,
    ModerateNegative,
    StrongNegative,
    VeryStrongNegative,
}

impl SentimentStrength {
    /// Classify a compound score into one of the seven intensity bands.
    /// Total over `[-1, 1]`: every input maps to exactly one band.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.75 {
            SentimentStrength::VeryStrongPositive
        } else if compound >= 0.5 {
            SentimentStrength::StrongPositive
        } else if compound >= 0.05 {
            SentimentStrength::ModeratePositive
        } else if compound > -0.05 {
            SentimentStrength::Neutral
        } else if compound > -0.5 {
            SentimentStrength::ModerateNegative
        } else if compound > -0.75 {
            SentimentStrength::StrongNegative
        } else {
            SentimentStrength::VeryStrongNegative
        }
    }

    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentStrength::VeryStrongPositive => "Very Strong Positive",
            SentimentStrength::StrongPositive => "Strong Positive",
            SentimentStrength::ModeratePositive => "Moderate Positive",
            SentimentStrength::Neutral => "Neutral",
            SentimentStrength::ModerateNegative => "Moderate Negative",
            SentimentStrength::StrongNegative => "Strong Negative",
            SentimentStrength::VeryStrongNegative => "Very Strong Negative",
        }
    }
}

impl std::fmt::Display for SentimentStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Frequency table
// ============================================================================

/// Word-frequency table preserving first-encounter order.
///
/// Backed by a hash index into an insertion-ordered entry list, so
/// iteration order is the order words first appeared and [`top_n`]
/// tie-breaks by that same order (stable sort on count).
///
/// [`top_n`]: FrequencyTable::top_n
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Maps words to their index in `entries`
    index: FxHashMap<String, usize>,
    /// (word, count) in first-encounter order
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        if let Some(&i) = self.index.get(word) {
            self.entries[i].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1));
        }
    }

    /// Get the count for a word, if present
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Check whether a word was counted at least once
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(word, count)` in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// The `n` most frequent words, count descending, ties broken by
    /// first-encounter order.
    pub fn top_n(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // Vec::sort_by is stable, so equal counts keep insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

// ============================================================================
// Keyword analysis
// ============================================================================

/// Trigger words matched for one emotion category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionMatch {
    /// The matched category
    pub category: EmotionCategory,
    /// Matched trigger words, in lexicon-defined order (not text order)
    pub words: Vec<String>,
}

/// Trigger words matched for one genre category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreMatch {
    /// The matched category
    pub category: GenreCategory,
    /// Matched trigger words, in lexicon-defined order (not text order)
    pub words: Vec<String>,
}

/// Keyword-level breakdown of one review.
///
/// Word lists preserve the frequency table's first-encounter order;
/// category matches appear in fixed category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Top words by count (at most `top_keywords`, default 10)
    pub word_frequency: Vec<(String, usize)>,
    /// Tokens from the positive lexicon with their counts
    pub positive_words: Vec<(String, usize)>,
    /// Tokens from the negative lexicon with their counts
    pub negative_words: Vec<(String, usize)>,
    /// Emotion categories with at least one matched trigger word
    pub emotions: Vec<EmotionMatch>,
    /// Genre categories with at least one matched trigger word
    pub genres: Vec<GenreMatch>,
    /// Token count after stopword/length filtering
    pub total_words: usize,
}

impl KeywordAnalysis {
    /// The analysis of an empty (or fully filtered) review
    pub fn empty() -> Self {
        Self {
            word_frequency: Vec::new(),
            positive_words: Vec::new(),
            negative_words: Vec::new(),
            emotions: Vec::new(),
            genres: Vec::new(),
            total_words: 0,
        }
    }
}

// ============================================================================
// Insight report
// ============================================================================

/// Natural-language reading of the scores and keywords.
///
/// `insights` is an ordered sequence: the tone sentence first, then word
/// examples, emotions, genres, and the length note, each present only
/// when its rule fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// 7-way intensity label for the whole review
    pub strength: SentimentStrength,
    /// Insight sentences in fixed rule order
    pub insights: Vec<String>,
    /// The compound score the report was derived from
    pub compound_score: f64,
}

// ============================================================================
// Sentence sentiment
// ============================================================================

/// Per-sentence sentiment record.
///
/// Positions are 1-based and renumbered over the surviving fragments:
/// discarded short fragments leave no gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSentiment {
    /// The trimmed sentence text
    pub text: String,
    /// Coarse label from the sentence's own compound score
    pub sentiment: SentimentLabel,
    /// Compound score of this sentence alone
    pub compound: f64,
    /// 1-based position in filtered order
    pub position: usize,
}

// ============================================================================
// Review analysis
// ============================================================================

/// The full result bundle for one review.
///
/// Created fresh per call to [`ReviewAnalyzer::analyze`], never cached or
/// stored. The presentation layer renders this directly (or via
/// [`to_json`]).
///
/// [`ReviewAnalyzer::analyze`]: crate::pipeline::ReviewAnalyzer::analyze
/// [`to_json`]: ReviewAnalysis::to_json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Coarse 3-way label for the whole review
    pub sentiment: SentimentLabel,
    /// Raw scores for the whole review
    pub scores: SentimentScore,
    /// Keyword breakdown
    pub keywords: KeywordAnalysis,
    /// Natural-language insights
    pub insights: InsightReport,
    /// Per-sentence records in appearance order
    pub sentences: Vec<SentenceSentiment>,
}

impl ReviewAnalysis {
    /// Serialize the bundle for the presentation layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for review analysis.
///
/// Defaults reproduce the reference behavior; every knob has a builder
/// method. Validate with [`AnalyzerConfig::validate`] before handing a
/// hand-edited config to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Number of top words surfaced in `word_frequency`
    pub top_keywords: usize,
    /// Shortest token kept by the tokenizer, in chars
    pub min_token_length: usize,
    /// Shortest sentence fragment scored, in chars
    pub min_sentence_length: usize,
    /// Word examples listed per insight ("like: a, b, c")
    pub max_example_words: usize,
    /// Reviews with fewer filtered tokens get the "brief" note
    pub brief_review_words: usize,
    /// Reviews with more filtered tokens get the "detailed" note
    pub detailed_review_words: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_keywords: 10,
            min_token_length: 3,
            min_sentence_length: 11,
            max_example_words: 3,
            brief_review_words: 30,
            detailed_review_words: 100,
        }
    }
}

impl AnalyzerConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_keywords == 0 {
            return Err(CinelexError::invalid_config("top_keywords must be > 0"));
        }

        if self.min_token_length == 0 {
            return Err(CinelexError::invalid_config("min_token_length must be > 0"));
        }

        if self.min_sentence_length == 0 {
            return Err(CinelexError::invalid_config(
                "min_sentence_length must be > 0",
            ));
        }

        if self.max_example_words == 0 {
            return Err(CinelexError::invalid_config(
                "max_example_words must be > 0",
            ));
        }

        if self.detailed_review_words <= self.brief_review_words {
            return Err(CinelexError::invalid_config(format!(
                "detailed_review_words ({}) must be > brief_review_words ({})",
                self.detailed_review_words, self.brief_review_words
            )));
        }

        Ok(())
    }

    /// Builder method: set top keyword count
    pub fn with_top_keywords(mut self, n: usize) -> Self {
        self.top_keywords = n;
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, len: usize) -> Self {
        self.min_token_length = len;
        self
    }

    /// Builder method: set minimum sentence length
    pub fn with_min_sentence_length(mut self, len: usize) -> Self {
        self.min_sentence_length = len;
        self
    }

    /// Builder method: set word examples per insight
    pub fn with_max_example_words(mut self, n: usize) -> Self {
        self.max_example_words = n;
        self
    }

    /// Builder method: set the brief-review threshold
    pub fn with_brief_review_words(mut self, n: usize) -> Self {
        self.brief_review_words = n;
        self
    }

    /// Builder method: set the detailed-review threshold
    pub fn with_detailed_review_words(mut self, n: usize) -> Self {
        self.detailed_review_words = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coarse_label_thresholds() {
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(0.9), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(-1.0), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(0.049), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.049), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_display_has_emoji() {
        assert_eq!(SentimentLabel::Positive.to_string(), "😊 Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "😠 Negative");
        assert_eq!(SentimentLabel::Neutral.to_string(), "😐 Neutral");
    }

    #[test]
    fn test_strength_bands() {
        use SentimentStrength::*;

        assert_eq!(SentimentStrength::from_compound(1.0), VeryStrongPositive);
        assert_eq!(SentimentStrength::from_compound(0.75), VeryStrongPositive);
        assert_eq!(SentimentStrength::from_compound(0.74), StrongPositive);
        assert_eq!(SentimentStrength::from_compound(0.5), StrongPositive);
        assert_eq!(SentimentStrength::from_compound(0.49), ModeratePositive);
        assert_eq!(SentimentStrength::from_compound(0.05), ModeratePositive);
        assert_eq!(SentimentStrength::from_compound(0.0), Neutral);
        assert_eq!(SentimentStrength::from_compound(-0.049), Neutral);
        assert_eq!(SentimentStrength::from_compound(-0.05), ModerateNegative);
        assert_eq!(SentimentStrength::from_compound(-0.5), ModerateNegative);
        assert_eq!(SentimentStrength::from_compound(-0.51), StrongNegative);
        assert_eq!(SentimentStrength::from_compound(-0.75), StrongNegative);
        assert_eq!(SentimentStrength::from_compound(-0.76), VeryStrongNegative);
        assert_eq!(SentimentStrength::from_compound(-1.0), VeryStrongNegative);
    }

    #[test]
    fn test_frequency_table_order_and_counts() {
        let mut table = FrequencyTable::new();
        for word in ["plot", "acting", "plot", "score", "acting", "plot"] {
            table.add(word);
        }

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("plot"), Some(3));
        assert_eq!(table.get("acting"), Some(2));
        assert_eq!(table.get("score"), Some(1));
        assert!(table.contains("score"));
        assert!(!table.contains("director"));

        let order: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["plot", "acting", "score"]);
    }

    #[test]
    fn test_frequency_table_top_n_stable_ties() {
        let mut table = FrequencyTable::new();
        for word in ["alpha", "beta", "gamma", "beta", "alpha", "gamma"] {
            table.add(word);
        }

        // All counts equal: top_n keeps first-encounter order.
        let top = table.top_n(2);
        assert_eq!(
            top,
            vec![("alpha".to_string(), 2), ("beta".to_string(), 2)]
        );
    }

    #[test]
    fn test_config_validation() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());

        let bad = AnalyzerConfig::default().with_top_keywords(0);
        assert!(bad.validate().is_err());

        let bad = AnalyzerConfig::default()
            .with_brief_review_words(100)
            .with_detailed_review_words(30);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_analysis_to_json() {
        let analysis = ReviewAnalysis {
            sentiment: SentimentLabel::Neutral,
            scores: SentimentScore::zero(),
            keywords: KeywordAnalysis::empty(),
            insights: InsightReport {
                strength: SentimentStrength::Neutral,
                insights: Vec::new(),
                compound_score: 0.0,
            },
            sentences: Vec::new(),
        };

        let json = analysis.to_json().unwrap();
        assert!(json.contains("\"sentiment\""));

        let back: ReviewAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}

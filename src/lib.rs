//! # cinelex
//!
//! Lexicon-based sentiment, emotion, and genre analysis for English
//! movie reviews.
//!
//! The pipeline tokenizes a review, counts keyword frequencies against
//! hand-authored polarity/emotion/genre lexicons, scores polarity with
//! a pluggable [`PolarityScorer`] (whole text and per sentence), and
//! derives natural-language insights. All lexicons are immutable
//! process-wide data; every analysis is a pure function of its input.
//!
//! ## Quick start
//!
//! ```
//! use cinelex::analyze_review;
//!
//! let analysis = analyze_review("An excellent and amazing masterpiece! I loved it.")?
//!     .expect("review is not blank");
//!
//! assert_eq!(analysis.sentiment.to_string(), "😊 Positive");
//! assert!(!analysis.keywords.positive_words.is_empty());
//! # Ok::<(), cinelex::CinelexError>(())
//! ```
//!
//! Blank input returns `Ok(None)`: no analysis is performed and that is
//! not an error. To swap in a different sentiment backend, implement
//! [`PolarityScorer`] and pass it to
//! [`ReviewAnalyzer::with_scorer`](pipeline::ReviewAnalyzer::with_scorer).

pub mod errors;
pub mod lexicon;
pub mod nlp;
pub mod pipeline;
pub mod scorer;
pub mod types;

// Re-export commonly used types
pub use errors::{CinelexError, Result};
pub use lexicon::{EmotionCategory, GenreCategory, PolarityLexicon, StopwordFilter};
pub use nlp::{SentenceSplitter, Tokenizer};
pub use pipeline::{InsightGenerator, KeywordAnalyzer, ReviewAnalyzer, SentenceAnalyzer};
pub use scorer::{PolarityScorer, ValenceScorer};
pub use types::{
    AnalyzerConfig, EmotionMatch, FrequencyTable, GenreMatch, InsightReport, KeywordAnalysis,
    ReviewAnalysis, SentenceSentiment, SentimentLabel, SentimentScore, SentimentStrength,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a review with the built-in scorer and default configuration.
///
/// Returns `Ok(None)` for blank input. Equivalent to
/// `ReviewAnalyzer::new().analyze(text)`.
pub fn analyze_review(text: &str) -> Result<Option<ReviewAnalysis>> {
    ReviewAnalyzer::new().analyze(text)
}

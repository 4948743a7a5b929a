//! Polarity scoring
//!
//! The pipeline never computes polarity itself; it consumes the
//! [`PolarityScorer`] contract. [`ValenceScorer`] is the built-in
//! lexicon/rule-based implementation; any equivalent valence-aware
//! scorer can be swapped in without touching pipeline code.

pub mod valence;

pub use valence::ValenceScorer;

use crate::errors::Result;
use crate::types::SentimentScore;

/// A sentiment scorer for arbitrary spans of text.
///
/// # Contract
///
/// - **Input**: any string slice, a whole review or a single sentence.
/// - **Output**: a [`SentimentScore`] with `compound` in `[-1, 1]`.
/// - **Deterministic**: the same text always yields the same score.
/// - **Errors**: propagate to the caller unhandled; the pipeline adds
///   no retry or fallback around scorer failures.
pub trait PolarityScorer {
    /// Score a span of text
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore>;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for &S {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore> {
        (**self).polarity_scores(text)
    }
}

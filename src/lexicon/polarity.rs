//! Positive and negative word sets
//!
//! Hand-authored movie-review vocabulary. Matching is exact surface
//! form against lowercased tokens: no stemming, so "love" and "loved"
//! are separate entries.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

static POSITIVE_WORDS: &[&str] = &[
    "excellent", "amazing", "outstanding", "brilliant", "fantastic", "awesome",
    "masterpiece", "perfect", "flawless", "superb", "magnificent", "wonderful",
    "captivating", "engaging", "thrilling", "emotional", "powerful", "beautiful",
    "stunning", "breathtaking", "memorable", "unforgettable", "innovative",
    "groundbreaking", "revolutionary", "inspiring", "touching", "heartwarming",
    "hilarious", "entertaining", "compelling", "gripping", "suspenseful", "great",
    "good", "best", "love", "loved", "enjoyed", "inspired",
];

static NEGATIVE_WORDS: &[&str] = &[
    "terrible", "awful", "horrible", "disappointing", "boring", "predictable",
    "confusing", "messy", "weak", "poor", "bad", "worst", "waste", "pointless",
    "ridiculous", "stupid", "nonsense", "uninspired", "cliché", "cliche",
    "forgettable", "overrated", "underwhelming", "mediocre", "generic",
    "formulaic", "pretentious", "dragging", "slow", "rushed", "incoherent",
    "hate", "hated", "dislike", "not",
];

static POSITIVE_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());

static NEGATIVE_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Membership tests against the positive/negative word sets
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityLexicon;

impl PolarityLexicon {
    /// Create a new lexicon handle
    pub fn new() -> Self {
        Self
    }

    /// Check whether an already-lowercased word is in the positive set
    pub fn is_positive(&self, word: &str) -> bool {
        POSITIVE_SET.contains(word)
    }

    /// Check whether an already-lowercased word is in the negative set
    pub fn is_negative(&self, word: &str) -> bool {
        NEGATIVE_SET.contains(word)
    }
}

//! Built-in lexicon/rule-based polarity scorer
//!
//! Walks the raw token stream, applying booster multipliers and a
//! negation window to graded word valences, then normalizes the summed
//! valence into a compound score in `[-1, 1]`.

use crate::errors::Result;
use crate::lexicon::ValenceLexicon;
use crate::scorer::PolarityScorer;
use crate::types::SentimentScore;

/// Normalization constant: compound = sum / sqrt(sum^2 + ALPHA)
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Damping applied when a negation flips a word's valence
const NEGATION_DAMPING: f64 = 0.8;

/// The default [`PolarityScorer`] implementation.
///
/// Scores text against the built-in valence lexicon. Total for any
/// string input: scoring never fails.
#[derive(Debug, Clone)]
pub struct ValenceScorer {
    /// Valence, booster, and negation tables
    lexicon: ValenceLexicon,
    /// Tokens after a negation that still get flipped
    negation_window: usize,
}

impl ValenceScorer {
    /// Create a scorer with the built-in lexicon
    pub fn new() -> Self {
        Self {
            lexicon: ValenceLexicon::new(),
            negation_window: 3,
        }
    }

    /// Set the negation window
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Lowercased tokens with edge punctuation trimmed.
    ///
    /// Unlike the pipeline tokenizer this keeps stopwords: negations
    /// and boosters ("not", "very") are exactly the words the stopword
    /// list would discard.
    fn raw_tokens(text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| {
                word.trim_matches(|c: char| c.is_ascii_punctuation())
                    .to_lowercase()
            })
            .filter(|word| !word.is_empty())
            .collect()
    }

    fn score_text(&self, text: &str) -> SentimentScore {
        let tokens = Self::raw_tokens(text);
        if tokens.is_empty() {
            return SentimentScore::zero();
        }

        let mut valence_sum = 0.0;
        let mut pos_mass = 0.0;
        let mut neg_mass = 0.0;
        let mut neu_count = 0usize;

        let mut booster = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                words_since_negation = 0;
                neu_count += 1;
                continue;
            }

            if let Some(multiplier) = self.lexicon.booster(token) {
                booster = multiplier;
                neu_count += 1;
                continue;
            }

            if let Some(base) = self.lexicon.valence(token) {
                let mut valence = base * booster;

                if negation_active && words_since_negation < self.negation_window {
                    valence = -valence * NEGATION_DAMPING;
                }

                valence_sum += valence;
                if valence > 0.0 {
                    pos_mass += valence + 1.0;
                } else if valence < 0.0 {
                    neg_mass += -valence + 1.0;
                } else {
                    neu_count += 1;
                }

                booster = 1.0;
            } else {
                neu_count += 1;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        let compound =
            (valence_sum / (valence_sum * valence_sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let total_mass = pos_mass + neg_mass + neu_count as f64;
        let (pos, neu, neg) = if total_mass > 0.0 {
            (
                pos_mass / total_mass,
                neu_count as f64 / total_mass,
                neg_mass / total_mass,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        tracing::trace!(compound, tokens = tokens.len(), "scored span");

        SentimentScore {
            compound,
            pos,
            neu,
            neg,
        }
    }
}

impl Default for ValenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for ValenceScorer {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore> {
        Ok(self.score_text(text))
    }
}

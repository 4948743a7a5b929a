//! Graded valence data for the built-in scorer
//!
//! Word valences are on a roughly -4..4 scale, with boosters as
//! multipliers on the next sentiment word and a negation list that
//! flips it. Vocabulary is movie-review oriented and covers the
//! polarity word sets plus common surrounding language.

use rustc_hash::{FxHashMap, FxHashSet};

/// Strongly positive words (2.4 and up)
static STRONG_POSITIVE: &[(&str, f64)] = &[
    ("masterpiece", 3.4),
    ("perfect", 3.2),
    ("flawless", 3.1),
    ("magnificent", 3.1),
    ("excellent", 3.0),
    ("outstanding", 3.0),
    ("brilliant", 3.0),
    ("superb", 3.0),
    ("best", 3.0),
    ("amazing", 2.9),
    ("fantastic", 2.9),
    ("breathtaking", 2.9),
    ("loved", 2.9),
    ("wonderful", 2.8),
    ("awesome", 2.8),
    ("love", 2.7),
    ("stunning", 2.7),
    ("great", 2.5),
    ("unforgettable", 2.5),
    ("incredible", 2.8),
    ("beautiful", 2.4),
    ("hilarious", 2.4),
    ("captivating", 2.4),
    ("groundbreaking", 2.4),
];

/// Moderately positive words (1.0 to 2.3)
static MODERATE_POSITIVE: &[(&str, f64)] = &[
    ("inspiring", 2.3),
    ("thrilling", 2.3),
    ("enjoyed", 2.2),
    ("heartwarming", 2.2),
    ("revolutionary", 2.2),
    ("gripping", 2.2),
    ("engaging", 2.1),
    ("compelling", 2.1),
    ("memorable", 2.0),
    ("entertaining", 2.0),
    ("innovative", 2.0),
    ("inspired", 2.0),
    ("fun", 2.0),
    ("enjoy", 2.0),
    ("enjoyable", 2.0),
    ("good", 1.9),
    ("touching", 1.9),
    ("delight", 1.9),
    ("powerful", 1.8),
    ("impressive", 1.8),
    ("charming", 1.7),
    ("joy", 1.7),
    ("suspenseful", 1.6),
    ("solid", 1.5),
    ("like", 1.5),
    ("liked", 1.6),
    ("happy", 1.6),
    ("pleasure", 1.6),
    ("romantic", 1.2),
    ("emotional", 1.2),
    ("interesting", 1.1),
    ("decent", 1.0),
];

/// Strongly negative words (-2.4 and down)
static STRONG_NEGATIVE: &[(&str, f64)] = &[
    ("worst", -3.1),
    ("horrible", -3.0),
    ("terrible", -2.9),
    ("hated", -2.9),
    ("awful", -2.8),
    ("atrocious", -2.8),
    ("hate", -2.7),
    ("unwatchable", -2.7),
    ("dreadful", -2.6),
    ("garbage", -2.5),
    ("bad", -2.5),
    ("boring", -2.4),
    ("disaster", -2.4),
];

/// Moderately negative words (-1.0 to -2.3)
static MODERATE_NEGATIVE: &[(&str, f64)] = &[
    ("waste", -2.3),
    ("stupid", -2.3),
    ("disappointing", -2.2),
    ("pointless", -2.2),
    ("poor", -2.1),
    ("disappointed", -2.1),
    ("nonsense", -1.9),
    ("incoherent", -1.9),
    ("dislike", -1.9),
    ("ridiculous", -1.8),
    ("uninspired", -1.8),
    ("underwhelming", -1.8),
    ("messy", -1.7),
    ("forgettable", -1.7),
    ("weak", -1.6),
    ("overrated", -1.6),
    ("pretentious", -1.6),
    ("confusing", -1.5),
    ("mediocre", -1.5),
    ("cliché", -1.5),
    ("cliche", -1.5),
    ("dragging", -1.5),
    ("dull", -1.5),
    ("formulaic", -1.4),
    ("rushed", -1.3),
    ("predictable", -1.3),
    ("generic", -1.2),
    ("flat", -1.2),
    ("slow", -1.1),
    ("bland", -1.1),
];

/// Boosters multiply the valence of the next sentiment word.
/// Values above 1 intensify; values below 1 dampen.
static BOOSTERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("incredibly", 1.45),
    ("absolutely", 1.4),
    ("utterly", 1.4),
    ("completely", 1.35),
    ("totally", 1.3),
    ("very", 1.3),
    ("truly", 1.3),
    ("highly", 1.3),
    ("really", 1.25),
    ("deeply", 1.2),
    ("so", 1.2),
    ("quite", 1.15),
    ("pretty", 1.15),
    ("rather", 1.1),
    ("fairly", 0.9),
    ("almost", 0.85),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
    ("hardly", 0.6),
];

/// Negation markers, including contraction forms with and without the
/// apostrophe
static NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere",
    "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
    "cant", "can't", "couldnt", "couldn't", "wont", "won't",
    "wouldnt", "wouldn't", "shouldnt", "shouldn't", "isnt", "isn't",
    "arent", "aren't", "wasnt", "wasn't", "werent", "weren't",
    "havent", "haven't", "hasnt", "hasn't", "hadnt", "hadn't",
];

/// Lookup tables for the built-in valence scorer
#[derive(Debug, Clone)]
pub struct ValenceLexicon {
    /// Word to signed valence
    valence: FxHashMap<&'static str, f64>,
    /// Booster word to multiplier
    boosters: FxHashMap<&'static str, f64>,
    /// Negation markers
    negations: FxHashSet<&'static str>,
}

impl ValenceLexicon {
    /// Build the lexicon from the static tables
    pub fn new() -> Self {
        let valence = STRONG_POSITIVE
            .iter()
            .chain(MODERATE_POSITIVE)
            .chain(STRONG_NEGATIVE)
            .chain(MODERATE_NEGATIVE)
            .copied()
            .collect();

        Self {
            valence,
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Signed valence of an already-lowercased word, if it carries one
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valence.get(word).copied()
    }

    /// Booster multiplier for a word, if it is one
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Check whether a word is a negation marker
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Number of valence-carrying words
    pub fn len(&self) -> usize {
        self.valence.len()
    }

    /// Always false: the built-in tables are non-empty
    pub fn is_empty(&self) -> bool {
        self.valence.is_empty()
    }
}

impl Default for ValenceLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_valences() {
        let lexicon = ValenceLexicon::new();

        assert!(lexicon.valence("masterpiece").unwrap() > 3.0);
        assert!(lexicon.valence("good").unwrap() > 0.0);
    }

    #[test]
    fn test_negative_valences() {
        let lexicon = ValenceLexicon::new();

        assert!(lexicon.valence("worst").unwrap() < -3.0);
        assert!(lexicon.valence("slow").unwrap() < 0.0);
    }

    #[test]
    fn test_unknown_word() {
        let lexicon = ValenceLexicon::new();

        assert!(lexicon.valence("projector").is_none());
    }

    #[test]
    fn test_boosters_and_dampeners() {
        let lexicon = ValenceLexicon::new();

        assert!(lexicon.booster("extremely").unwrap() > 1.0);
        assert!(lexicon.booster("slightly").unwrap() < 1.0);
        assert!(lexicon.booster("movie").is_none());
    }

    #[test]
    fn test_negations() {
        let lexicon = ValenceLexicon::new();

        assert!(lexicon.is_negation("not"));
        assert!(lexicon.is_negation("don't"));
        assert!(lexicon.is_negation("dont"));
        assert!(!lexicon.is_negation("masterpiece"));
    }

    #[test]
    fn test_polarity_words_have_valence() {
        // Every word the keyword analyzer can flag as positive/negative
        // also carries a valence, so scorer and keyword views agree.
        let lexicon = ValenceLexicon::new();

        for word in [
            "excellent", "amazing", "masterpiece", "loved", "great", "entertaining",
        ] {
            assert!(lexicon.valence(word).unwrap() > 0.0, "{} missing", word);
        }

        for word in ["terrible", "boring", "predictable", "waste", "hated"] {
            assert!(lexicon.valence(word).unwrap() < 0.0, "{} missing", word);
        }
    }
}

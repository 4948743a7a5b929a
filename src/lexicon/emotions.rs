//! Emotion categories and their trigger words

use serde::{Deserialize, Serialize};

/// The six emotion categories a review can express.
///
/// [`EmotionCategory::ALL`] fixes the reporting order; trigger words are
/// matched and listed in the order defined here, not text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Happy,
    Sad,
    Angry,
    Fear,
    Surprise,
    Love,
}

impl EmotionCategory {
    /// All categories, in reporting order
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Happy,
        EmotionCategory::Sad,
        EmotionCategory::Angry,
        EmotionCategory::Fear,
        EmotionCategory::Surprise,
        EmotionCategory::Love,
    ];

    /// The lowercase category name
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Happy => "happy",
            EmotionCategory::Sad => "sad",
            EmotionCategory::Angry => "angry",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Surprise => "surprise",
            EmotionCategory::Love => "love",
        }
    }

    /// Trigger words for this category, in lexicon-defined order
    pub fn trigger_words(&self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Happy => &[
                "joy", "delight", "happy", "pleasure", "excitement", "thrilled", "fun",
                "enjoyable",
            ],
            EmotionCategory::Sad => &[
                "sad", "depressing", "heartbreaking", "tragic", "melancholy", "grief", "sorrow",
            ],
            EmotionCategory::Angry => &[
                "angry", "frustrating", "annoying", "infuriating", "rage", "outrage", "mad",
            ],
            EmotionCategory::Fear => &[
                "scary", "frightening", "terrifying", "horror", "dread", "anxiety", "fear",
            ],
            EmotionCategory::Surprise => &[
                "surprising", "shocking", "unexpected", "twist", "revelation", "surprise",
            ],
            EmotionCategory::Love => &[
                "romantic", "love", "affection", "passion", "heartwarming", "tender", "caring",
            ],
        }
    }
}

impl std::fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_categories() {
        assert_eq!(EmotionCategory::ALL.len(), 6);
    }

    #[test]
    fn test_trigger_words_nonempty() {
        for category in EmotionCategory::ALL {
            assert!(!category.trigger_words().is_empty());
        }
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&EmotionCategory::Surprise).unwrap();
        assert_eq!(json, r#""surprise""#);
    }
}

//! Insight generation
//!
//! Derives the 7-way strength label and the ordered natural-language
//! insight sentences from the scores and keyword breakdown.
//!
//! The tone sentence uses its own 5-way compound split, distinct from
//! both label classifiers; the three mappings are intentionally kept
//! separate.

use crate::types::{AnalyzerConfig, InsightReport, KeywordAnalysis, SentimentScore, SentimentStrength};

/// Produces the [`InsightReport`] for a review
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    /// Word examples listed per polarity insight
    max_example_words: usize,
    /// Token count below which the "brief" note fires
    brief_review_words: usize,
    /// Token count above which the "detailed" note fires
    detailed_review_words: usize,
}

impl InsightGenerator {
    /// Create a generator with default thresholds
    pub fn new() -> Self {
        Self::with_config(&AnalyzerConfig::default())
    }

    /// Create a generator from a config
    pub fn with_config(config: &AnalyzerConfig) -> Self {
        Self {
            max_example_words: config.max_example_words,
            brief_review_words: config.brief_review_words,
            detailed_review_words: config.detailed_review_words,
        }
    }

    /// Generate the insight report.
    ///
    /// Rules run in fixed order, each appending at most one sentence:
    /// tone, positive word examples, negative word examples, emotions,
    /// genres, review length.
    pub fn generate(&self, score: &SentimentScore, keywords: &KeywordAnalysis) -> InsightReport {
        let compound = score.compound;
        let mut insights = Vec::new();

        insights.push(tone_sentence(compound).to_string());

        if !keywords.positive_words.is_empty() {
            insights.push(format!(
                "Uses positive words like: {}",
                word_examples(&keywords.positive_words, self.max_example_words)
            ));
        }

        if !keywords.negative_words.is_empty() {
            insights.push(format!(
                "Uses negative words like: {}",
                word_examples(&keywords.negative_words, self.max_example_words)
            ));
        }

        if !keywords.emotions.is_empty() {
            let names: Vec<&str> = keywords
                .emotions
                .iter()
                .map(|m| m.category.as_str())
                .collect();
            insights.push(format!("Expresses {} emotions", names.join(", ")));
        }

        if !keywords.genres.is_empty() {
            let names: Vec<&str> = keywords
                .genres
                .iter()
                .map(|m| m.category.as_str())
                .collect();
            insights.push(format!("Suggests {} elements", names.join(", ")));
        }

        if keywords.total_words > self.detailed_review_words {
            insights.push("Detailed review with substantial content".to_string());
        } else if keywords.total_words < self.brief_review_words {
            insights.push("Brief and concise review".to_string());
        }

        InsightReport {
            strength: SentimentStrength::from_compound(compound),
            insights,
            compound_score: compound,
        }
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The first `cap` words in table order, comma-joined
fn word_examples(words: &[(String, usize)], cap: usize) -> String {
    words
        .iter()
        .take(cap)
        .map(|(word, _)| word.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 5-way tone sentence for the compound score
fn tone_sentence(compound: f64) -> &'static str {
    if compound > 0.5 {
        "This review expresses strong positive sentiment about the movie."
    } else if compound > 0.0 {
        "The review has a generally positive tone."
    } else if compound < -0.5 {
        "This review shows strong negative feelings about the movie."
    } else if compound < 0.0 {
        "The review has a generally negative tone."
    } else {
        "The review maintains a neutral or balanced perspective."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmotionMatch, GenreMatch};
    use crate::lexicon::{EmotionCategory, GenreCategory};

    fn score(compound: f64) -> SentimentScore {
        SentimentScore {
            compound,
            pos: 0.0,
            neu: 1.0,
            neg: 0.0,
        }
    }

    #[test]
    fn test_tone_sentences() {
        assert!(tone_sentence(0.8).contains("strong positive"));
        assert!(tone_sentence(0.3).contains("generally positive"));
        assert!(tone_sentence(-0.8).contains("strong negative"));
        assert!(tone_sentence(-0.3).contains("generally negative"));
        assert!(tone_sentence(0.0).contains("neutral or balanced"));

        // Boundaries: exactly ±0.5 falls to the "generally" branches.
        assert!(tone_sentence(0.5).contains("generally positive"));
        assert!(tone_sentence(-0.5).contains("generally negative"));
    }

    #[test]
    fn test_rule_order() {
        let generator = InsightGenerator::new();
        let keywords = KeywordAnalysis {
            word_frequency: vec![("excellent".to_string(), 1)],
            positive_words: vec![("excellent".to_string(), 1)],
            negative_words: vec![("slow".to_string(), 1)],
            emotions: vec![EmotionMatch {
                category: EmotionCategory::Happy,
                words: vec!["fun".to_string()],
            }],
            genres: vec![GenreMatch {
                category: GenreCategory::Drama,
                words: vec!["drama".to_string()],
            }],
            total_words: 12,
        };

        let report = generator.generate(&score(0.7), &keywords);

        assert_eq!(report.strength, SentimentStrength::StrongPositive);
        assert_eq!(report.insights.len(), 6);
        assert!(report.insights[0].contains("strong positive"));
        assert!(report.insights[1].starts_with("Uses positive words like: excellent"));
        assert!(report.insights[2].starts_with("Uses negative words like: slow"));
        assert_eq!(report.insights[3], "Expresses happy emotions");
        assert_eq!(report.insights[4], "Suggests drama elements");
        assert_eq!(report.insights[5], "Brief and concise review");
    }

    #[test]
    fn test_word_examples_capped_at_three() {
        let generator = InsightGenerator::new();
        let keywords = KeywordAnalysis {
            positive_words: vec![
                ("excellent".to_string(), 1),
                ("amazing".to_string(), 1),
                ("superb".to_string(), 1),
                ("great".to_string(), 1),
            ],
            total_words: 50,
            ..KeywordAnalysis::empty()
        };

        let report = generator.generate(&score(0.2), &keywords);

        assert_eq!(
            report.insights[1],
            "Uses positive words like: excellent, amazing, superb"
        );
    }

    #[test]
    fn test_multiple_category_names_joined() {
        let generator = InsightGenerator::new();
        let keywords = KeywordAnalysis {
            emotions: vec![
                EmotionMatch {
                    category: EmotionCategory::Sad,
                    words: vec!["tragic".to_string()],
                },
                EmotionMatch {
                    category: EmotionCategory::Fear,
                    words: vec!["dread".to_string()],
                },
            ],
            total_words: 40,
            ..KeywordAnalysis::empty()
        };

        let report = generator.generate(&score(-0.2), &keywords);

        assert_eq!(report.insights[1], "Expresses sad, fear emotions");
    }

    #[test]
    fn test_length_notes() {
        let generator = InsightGenerator::new();

        let brief = KeywordAnalysis {
            total_words: 10,
            ..KeywordAnalysis::empty()
        };
        let report = generator.generate(&score(0.0), &brief);
        assert_eq!(report.insights.last().unwrap(), "Brief and concise review");

        let detailed = KeywordAnalysis {
            total_words: 150,
            ..KeywordAnalysis::empty()
        };
        let report = generator.generate(&score(0.0), &detailed);
        assert_eq!(
            report.insights.last().unwrap(),
            "Detailed review with substantial content"
        );

        // 30..=100 produces no length note: only the tone sentence.
        let medium = KeywordAnalysis {
            total_words: 60,
            ..KeywordAnalysis::empty()
        };
        let report = generator.generate(&score(0.0), &medium);
        assert_eq!(report.insights.len(), 1);
    }

    #[test]
    fn test_empty_keywords_only_tone() {
        let generator = InsightGenerator::new();
        let report = generator.generate(&score(0.0), &KeywordAnalysis::empty());

        // Empty analysis still gets the tone sentence and, at zero
        // words, the brief note.
        assert_eq!(report.insights.len(), 2);
        assert!(report.insights[0].contains("neutral or balanced"));
        assert_eq!(report.insights[1], "Brief and concise review");
    }
}

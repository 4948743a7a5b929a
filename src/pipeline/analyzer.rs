//! Pipeline orchestration
//!
//! [`ReviewAnalyzer`] threads one review through scoring, keyword
//! analysis, insight generation, and per-sentence scoring, producing a
//! fresh [`ReviewAnalysis`] per call. No state is shared between calls
//! beyond the immutable lexicons.

use crate::errors::Result;
use crate::pipeline::insights::InsightGenerator;
use crate::pipeline::keywords::KeywordAnalyzer;
use crate::pipeline::sentences::SentenceAnalyzer;
use crate::scorer::{PolarityScorer, ValenceScorer};
use crate::types::{AnalyzerConfig, ReviewAnalysis, SentimentLabel};
use rayon::prelude::*;
use tracing::debug;

/// Analyzes movie reviews end to end.
///
/// Generic over the polarity scorer so any [`PolarityScorer`]
/// implementation can be substituted without touching pipeline logic;
/// defaults to the built-in [`ValenceScorer`].
#[derive(Debug, Clone)]
pub struct ReviewAnalyzer<S = ValenceScorer> {
    scorer: S,
    keywords: KeywordAnalyzer,
    insights: InsightGenerator,
    sentences: SentenceAnalyzer,
    config: AnalyzerConfig,
}

impl ReviewAnalyzer<ValenceScorer> {
    /// Create an analyzer with the built-in scorer and default config
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with the built-in scorer and a custom config
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            scorer: ValenceScorer::new(),
            keywords: KeywordAnalyzer::with_config(&config),
            insights: InsightGenerator::with_config(&config),
            sentences: SentenceAnalyzer::with_config(&config),
            config,
        }
    }
}

impl Default for ReviewAnalyzer<ValenceScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PolarityScorer> ReviewAnalyzer<S> {
    /// Replace the polarity scorer, keeping everything else
    pub fn with_scorer<T: PolarityScorer>(self, scorer: T) -> ReviewAnalyzer<T> {
        ReviewAnalyzer {
            scorer,
            keywords: self.keywords,
            insights: self.insights,
            sentences: self.sentences,
            config: self.config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one review.
    ///
    /// Blank (empty or whitespace-only) input is not an error: it
    /// returns `Ok(None)`, meaning no analysis was performed. Scorer
    /// failures propagate unchanged.
    pub fn analyze(&self, text: &str) -> Result<Option<ReviewAnalysis>> {
        if text.trim().is_empty() {
            debug!("blank review, skipping analysis");
            return Ok(None);
        }

        let scores = self.scorer.polarity_scores(text)?;
        let sentiment = SentimentLabel::from_compound(scores.compound);
        debug!(
            compound = scores.compound,
            label = sentiment.as_str(),
            "scored review"
        );

        let keywords = self.keywords.analyze(text);
        let insights = self.insights.generate(&scores, &keywords);
        let sentences = self.sentences.analyze(text, &self.scorer)?;
        debug!(
            total_words = keywords.total_words,
            sentences = sentences.len(),
            "analysis complete"
        );

        Ok(Some(ReviewAnalysis {
            sentiment,
            scores,
            keywords,
            insights,
            sentences,
        }))
    }

    /// Analyze many independent reviews in parallel.
    ///
    /// Per-review semantics are identical to [`analyze`]; the first
    /// scorer error aborts the batch.
    ///
    /// [`analyze`]: ReviewAnalyzer::analyze
    pub fn analyze_batch(&self, texts: &[String]) -> Result<Vec<Option<ReviewAnalysis>>>
    where
        S: Sync,
    {
        texts.par_iter().map(|text| self.analyze(text)).collect()
    }
}

//! The review-analysis pipeline
//!
//! Stages, in execution order: whole-text polarity scoring, keyword
//! analysis, insight generation, per-sentence scoring. The
//! [`ReviewAnalyzer`] orchestrates them into one [`ReviewAnalysis`]
//! bundle per request.
//!
//! [`ReviewAnalysis`]: crate::types::ReviewAnalysis

pub mod analyzer;
pub mod insights;
pub mod keywords;
pub mod sentences;

pub use analyzer::ReviewAnalyzer;
pub use insights::InsightGenerator;
pub use keywords::KeywordAnalyzer;
pub use sentences::SentenceAnalyzer;

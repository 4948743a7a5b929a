//! Static lexicon data.
//!
//! All word lists here are process-wide, immutable, and English-only:
//! polarity word sets, per-emotion and per-genre trigger sets, the
//! stopword list, and the graded valence map used by the built-in
//! scorer. Sets are built lazily once and are safe for unsynchronized
//! concurrent reads.
//!
//! Membership tests assume already-lowercased input; the tokenizer and
//! scorer lowercase before lookup.

pub mod emotions;
pub mod genres;
pub mod polarity;
pub mod stopwords;
pub mod valence;

pub use emotions::EmotionCategory;
pub use genres::GenreCategory;
pub use polarity::PolarityLexicon;
pub use stopwords::StopwordFilter;
pub use valence::ValenceLexicon;

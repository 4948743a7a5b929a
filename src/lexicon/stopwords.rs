//! English stopword filtering

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Common English stopwords.
///
/// Includes contraction fragments left over from apostrophe-aware
/// tokenizers ("don't", "ll", "ve"); the punctuation-stripping tokenizer
/// never produces the apostrophe forms, but they are part of the list.
static STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've",
    "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't",
    "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOP_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Stopword membership filter over the fixed English list
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordFilter;

impl StopwordFilter {
    /// Create a new filter
    pub fn new() -> Self {
        Self
    }

    /// Check whether an already-lowercased word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        STOP_SET.contains(word)
    }

    /// Number of words in the list
    pub fn len(&self) -> usize {
        STOP_SET.len()
    }

    /// Always false: the built-in list is non-empty
    pub fn is_empty(&self) -> bool {
        STOP_SET.is_empty()
    }
}

//! Genre categories and their indicator words

use serde::{Deserialize, Serialize};

/// The seven genre categories a review can suggest.
///
/// [`GenreCategory::ALL`] fixes the reporting order; trigger words are
/// matched and listed in the order defined here, not text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreCategory {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    #[serde(rename = "sci-fi")]
    SciFi,
    Fantasy,
}

impl GenreCategory {
    /// All categories, in reporting order
    pub const ALL: [GenreCategory; 7] = [
        GenreCategory::Action,
        GenreCategory::Comedy,
        GenreCategory::Drama,
        GenreCategory::Horror,
        GenreCategory::Romance,
        GenreCategory::SciFi,
        GenreCategory::Fantasy,
    ];

    /// The lowercase category name
    pub fn as_str(&self) -> &'static str {
        match self {
            GenreCategory::Action => "action",
            GenreCategory::Comedy => "comedy",
            GenreCategory::Drama => "drama",
            GenreCategory::Horror => "horror",
            GenreCategory::Romance => "romance",
            GenreCategory::SciFi => "sci-fi",
            GenreCategory::Fantasy => "fantasy",
        }
    }

    /// Indicator words for this category, in lexicon-defined order
    pub fn trigger_words(&self) -> &'static [&'static str] {
        match self {
            GenreCategory::Action => &[
                "action", "fight", "battle", "explosion", "thriller", "adventure", "chase",
                "combat",
            ],
            GenreCategory::Comedy => &[
                "funny", "comedy", "humor", "laugh", "hilarious", "joke", "comic", "humorous",
            ],
            GenreCategory::Drama => &[
                "drama", "emotional", "serious", "realistic", "character", "story", "plot",
            ],
            GenreCategory::Horror => &[
                "horror", "scary", "frightening", "terror", "ghost", "monster", "creepy",
            ],
            GenreCategory::Romance => &[
                "romance", "love", "relationship", "couple", "romantic", "heart", "affection",
            ],
            GenreCategory::SciFi => &[
                "sci-fi", "science", "future", "space", "alien", "technology", "robot",
            ],
            GenreCategory::Fantasy => &[
                "fantasy", "magic", "mythical", "dragon", "wizard", "kingdom", "magical",
            ],
        }
    }
}

impl std::fmt::Display for GenreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Jikan API response types.
//!
//! Only the fields the widget displays are modelled; everything else in the
//! payload is ignored during deserialization.

#![allow(clippy::derive_partial_eq_without_eq)]

use serde::{Deserialize, Serialize};

/// Every Jikan response wraps its payload in a `data` member.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    /// The payload.
    pub data: T,
}

/// One anime record as returned by the search and random endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeSummary {
    /// MyAnimeList identifier.
    pub mal_id: u64,
    /// Default (romanized) title.
    pub title: String,
    /// English title.
    #[serde(default)]
    pub title_english: Option<String>,
    /// Japanese title.
    #[serde(default)]
    pub title_japanese: Option<String>,
    /// Year of first broadcast.
    #[serde(default)]
    pub year: Option<u32>,
    /// Episode count.
    #[serde(default)]
    pub episodes: Option<u32>,
    /// Episode duration as free text (`"24 min per ep"`).
    #[serde(default)]
    pub duration: Option<String>,
    /// Average score out of 10.
    #[serde(default)]
    pub score: Option<f64>,
    /// Number of users who scored it.
    #[serde(default)]
    pub scored_by: Option<u64>,
    /// Background notes.
    #[serde(default)]
    pub background: Option<String>,
    /// Plot synopsis.
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Genres, in API order.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Cover images.
    #[serde(default)]
    pub images: Images,
}

impl AnimeSummary {
    /// Create a record with only the required fields set.
    #[must_use]
    pub fn new(mal_id: u64, title: impl Into<String>) -> Self {
        Self {
            mal_id,
            title: title.into(),
            title_english: None,
            title_japanese: None,
            year: None,
            episodes: None,
            duration: None,
            score: None,
            scored_by: None,
            background: None,
            synopsis: None,
            genres: Vec::new(),
            images: Images::default(),
        }
    }

    /// Exact-name comparison between `query` and the default title.
    ///
    /// Case and whitespace are ignored, so `"onepiece"` names `"One Piece"`;
    /// any other difference is a mismatch.
    #[must_use]
    pub fn title_matches(&self, query: &str) -> bool {
        let query = match_key(query);
        !query.is_empty() && match_key(&self.title) == query
    }

    /// Best available cover URL: the large JPEG, else the regular one.
    #[must_use]
    pub fn cover_url(&self) -> Option<&str> {
        let jpg = &self.images.jpg;
        [&jpg.large_image_url, &jpg.image_url]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|url| !url.is_empty())
    }
}

/// A genre tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Display name.
    pub name: String,
}

impl Genre {
    /// Create a genre.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Image sets keyed by format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    /// JPEG variants.
    #[serde(default)]
    pub jpg: ImageSet,
}

/// URLs for one image format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    /// Regular size.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Large size.
    #[serde(default)]
    pub large_image_url: Option<String>,
}

fn match_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Select the first candidate whose title matches `query` (see
/// [`AnimeSummary::title_matches`]).
#[must_use]
pub fn find_exact_match(candidates: Vec<AnimeSummary>, query: &str) -> Option<AnimeSummary> {
    candidates.into_iter().find(|anime| anime.title_matches(query))
}

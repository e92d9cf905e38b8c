//! Core types for the movie catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Oldest movie on IMDb: "Man Walking Around the Corner" (1887).
pub const MIN_YEAR: i32 = 1887;

/// Fuzzy-match threshold on the 0-100 similarity scale. A title qualifies
/// only when at least one of its words scores strictly above this.
pub const FUZZY_THRESHOLD: f64 = 70.0;

/// Per-title record payload as persisted in the backing file.
///
/// `poster` is optional on read but always materialized on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub rating: f64,
    pub year: i32,
    #[serde(default)]
    pub poster: String,
}

/// The full in-memory collection, keyed by title.
///
/// A BTreeMap keeps iteration deterministic (lexicographic by title), which
/// fixes the tie-break order for best/worst and the default listing order.
pub type Collection = BTreeMap<String, MovieEntry>;

/// A single movie row as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

impl Movie {
    pub fn from_entry(title: &str, entry: &MovieEntry) -> Self {
        Self {
            title: title.to_string(),
            year: entry.year,
            rating: entry.rating,
            poster: entry.poster.clone(),
        }
    }
}

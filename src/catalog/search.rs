//! Title search: exact substring matching with an approximate fallback.
//!
//! The fallback tokenizes each title into words and scores the search term
//! against every word with a normalized indel similarity (the `fuzz.ratio`
//! convention: 0-100, substitutions count as delete plus insert). A title
//! qualifies when any word scores strictly above [`FUZZY_THRESHOLD`].

use crate::types::{Collection, Movie, FUZZY_THRESHOLD};

/// Outcome of a search, so the caller can distinguish exact hits from
/// "did you mean" suggestions.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Exact(Vec<Movie>),
    Fuzzy(Vec<Movie>),
    NoMatch,
}

pub fn search(movies: &Collection, term: &str) -> SearchOutcome {
    let needle = term.to_lowercase();

    let exact: Vec<Movie> = movies
        .iter()
        .filter(|(title, _)| title.to_lowercase().contains(&needle))
        .map(|(title, entry)| Movie::from_entry(title, entry))
        .collect();
    if !exact.is_empty() {
        return SearchOutcome::Exact(exact);
    }

    let fuzzy = fuzzy_search(movies, &needle);
    if fuzzy.is_empty() {
        SearchOutcome::NoMatch
    } else {
        SearchOutcome::Fuzzy(fuzzy)
    }
}

/// Titles with at least one word similar to the (lowercased) term. Each
/// title appears at most once: the word loop breaks on the first qualifier.
fn fuzzy_search(movies: &Collection, needle: &str) -> Vec<Movie> {
    let mut results = Vec::new();
    for (title, entry) in movies {
        for word in title.split_whitespace() {
            if similarity(needle, &word.to_lowercase()) > FUZZY_THRESHOLD {
                results.push(Movie::from_entry(title, entry));
                break;
            }
        }
    }
    results
}

/// Normalized indel similarity scaled to 0-100.
///
/// `100 * (len_a + len_b - indel_distance(a, b)) / (len_a + len_b)`, over
/// Unicode scalar values. Two empty strings are identical (100).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let dist = indel_distance(&a, &b);
    100.0 * (total - dist) as f64 / total as f64
}

/// Edit distance where only insertions and deletions are allowed, so a
/// substitution costs 2. Single-row dynamic program.
fn indel_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb {
                prev_diag
            } else {
                // no substitution: best of delete from a or insert from b
                row[j].min(row[j + 1]) + 1
            };
            prev_diag = row[j + 1];
            row[j + 1] = cost.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}

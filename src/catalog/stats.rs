//! Rating statistics over the collection.

use crate::types::{Collection, Movie};

/// Summary statistics for a non-empty collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub average: f64,
    pub median: f64,
    pub best: Movie,
    pub worst: Movie,
}

/// Compute average, median, best, and worst. Returns `None` on an empty
/// collection.
///
/// Median is the even-count-aware convention: the middle element for odd
/// counts, the mean of the two central elements for even counts. Best and
/// worst ties resolve to the lexicographically smallest title, which is the
/// iteration order of the collection.
pub fn compute(movies: &Collection) -> Option<CatalogStats> {
    if movies.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = movies.values().map(|e| e.rating).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));

    let n = ratings.len();
    let average = ratings.iter().sum::<f64>() / n as f64;
    let median = if n % 2 != 0 {
        ratings[n / 2]
    } else {
        (ratings[n / 2 - 1] + ratings[n / 2]) / 2.0
    };

    // Keep the first strict max/min so ties resolve to the earliest title
    // in iteration order (lexicographic for a BTreeMap).
    let mut best: Option<(&String, &crate::types::MovieEntry)> = None;
    let mut worst: Option<(&String, &crate::types::MovieEntry)> = None;
    for (title, entry) in movies {
        if best.map_or(true, |(_, b)| entry.rating > b.rating) {
            best = Some((title, entry));
        }
        if worst.map_or(true, |(_, w)| entry.rating < w.rating) {
            worst = Some((title, entry));
        }
    }
    let best = best.map(|(title, entry)| Movie::from_entry(title, entry))?;
    let worst = worst.map(|(title, entry)| Movie::from_entry(title, entry))?;

    Some(CatalogStats {
        average,
        median,
        best,
        worst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieEntry;

    fn catalog(entries: &[(&str, f64)]) -> Collection {
        entries
            .iter()
            .map(|&(title, rating)| {
                (
                    title.to_string(),
                    MovieEntry {
                        rating,
                        year: 2000,
                        poster: String::new(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn empty_collection_has_no_stats() {
        assert!(compute(&Collection::new()).is_none());
    }

    #[test]
    fn known_fixture() {
        let movies = catalog(&[("A", 6.0), ("B", 8.0), ("C", 10.0)]);
        let stats = compute(&movies).unwrap();
        assert_eq!(stats.average, 8.0);
        assert_eq!(stats.median, 8.0);
        assert_eq!(stats.best.title, "C");
        assert_eq!(stats.worst.title, "A");
    }

    #[test]
    fn odd_count_median_is_middle_element() {
        let movies = catalog(&[("A", 2.0), ("B", 9.0), ("C", 4.0)]);
        assert_eq!(compute(&movies).unwrap().median, 4.0);
    }

    #[test]
    fn even_count_median_averages_central_pair() {
        let movies = catalog(&[("A", 2.0), ("B", 4.0), ("C", 7.0), ("D", 9.0)]);
        assert_eq!(compute(&movies).unwrap().median, 5.5);
    }

    #[test]
    fn ties_resolve_to_lexicographically_smallest_title() {
        let movies = catalog(&[("Zulu", 9.0), ("Alpha", 9.0), ("Mid", 5.0), ("Beta", 1.0), ("Aardvark", 1.0)]);
        let stats = compute(&movies).unwrap();
        assert_eq!(stats.best.title, "Alpha");
        assert_eq!(stats.worst.title, "Aardvark");
    }
}

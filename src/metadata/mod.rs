//! External metadata lookup.
//!
//! Client for OMDb-style movie metadata APIs, used to prefill a record from
//! a title. Absence of a match is a non-error `None` outcome; only
//! transport, HTTP, and parse failures surface as errors.

mod omdb;

pub use omdb::{OmdbClient, OmdbConfig};

/// A metadata record as normalized from the API payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

/// First 4-digit run in a possibly-ranged year string ("2001–2003" → 2001).
pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    let digits: Vec<char> = raw.chars().collect();
    let mut run = String::new();
    for c in digits {
        if c.is_ascii_digit() {
            run.push(c);
            if run.len() == 4 {
                return run.parse().ok();
            }
        } else {
            run.clear();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_year() {
        assert_eq!(parse_year("1997"), Some(1997));
    }

    #[test]
    fn ranged_year_takes_first() {
        assert_eq!(parse_year("2001–2003"), Some(2001));
        assert_eq!(parse_year("2001-2003"), Some(2001));
    }

    #[test]
    fn junk_years_rejected() {
        assert_eq!(parse_year("N/A"), None);
        assert_eq!(parse_year("ca. 99"), None);
        assert_eq!(parse_year(""), None);
    }
}

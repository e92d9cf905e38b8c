//! Field validation for movie records.
//!
//! Pure, Result-returning checks shared by the interactive prompts and the
//! catalog operations, so both paths enforce identical rules.

use crate::error::CatalogError;
use crate::types::{Collection, MIN_YEAR};
use once_cell::sync::Lazy;
use regex_lite::Regex;

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s\-',.!?]+$").expect("valid title pattern"));

/// The upper bound for release years.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

/// Title must be non-empty, use the allowed character class, and not
/// collide with an existing record.
pub fn validate_title(title: &str, movies: &Collection) -> Result<(), CatalogError> {
    if title.trim().is_empty() {
        return Err(CatalogError::Validation(
            "movie name must not be empty".to_string(),
        ));
    }
    if !TITLE_PATTERN.is_match(title) {
        return Err(CatalogError::Validation(
            "movie name contains invalid characters".to_string(),
        ));
    }
    if movies.contains_key(title) {
        return Err(CatalogError::Validation(format!(
            "movie '{}' already exists",
            title
        )));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), CatalogError> {
    let max_year = current_year();
    if !(MIN_YEAR..=max_year).contains(&year) {
        return Err(CatalogError::Validation(format!(
            "year must be between {} and {}",
            MIN_YEAR, max_year
        )));
    }
    Ok(())
}

/// Rating must be in [0, 10] with at most one decimal digit.
pub fn validate_rating(rating: f64) -> Result<(), CatalogError> {
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err(CatalogError::Validation(
            "rating must be between 0 and 10".to_string(),
        ));
    }
    let tenths = rating * 10.0;
    if (tenths - tenths.round()).abs() > 1e-9 {
        return Err(CatalogError::Validation(
            "rating should have at most one decimal place".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieEntry;

    fn with_titanic() -> Collection {
        let mut movies = Collection::new();
        movies.insert(
            "Titanic".to_string(),
            MovieEntry {
                rating: 9.2,
                year: 1997,
                poster: String::new(),
            },
        );
        movies
    }

    #[test]
    fn empty_title_rejected() {
        let movies = Collection::new();
        assert!(validate_title("", &movies).is_err());
        assert!(validate_title("   ", &movies).is_err());
    }

    #[test]
    fn punctuation_set_accepted() {
        let movies = Collection::new();
        assert!(validate_title("Mad Max - Fury Road!", &movies).is_ok());
        assert!(validate_title("What's Up, Doc?", &movies).is_ok());
        assert!(validate_title("8.5", &movies).is_ok());
    }

    #[test]
    fn characters_outside_class_rejected() {
        let movies = Collection::new();
        assert!(validate_title("Amélie", &movies).is_err());
        assert!(validate_title("Movie #1", &movies).is_err());
        assert!(validate_title("a/b", &movies).is_err());
    }

    #[test]
    fn duplicate_title_rejected_with_name() {
        let movies = with_titanic();
        let err = validate_title("Titanic", &movies).unwrap_err();
        assert!(err.to_string().contains("Titanic"));
    }

    #[test]
    fn year_bounds_enforced() {
        assert!(validate_year(1800).is_err());
        assert!(validate_year(1887).is_ok());
        assert!(validate_year(current_year()).is_ok());
        assert!(validate_year(current_year() + 1).is_err());
    }

    #[test]
    fn rating_bounds_enforced() {
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(10.0).is_ok());
        assert!(validate_rating(11.0).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn rating_precision_limited_to_one_decimal() {
        assert!(validate_rating(7.5).is_ok());
        assert!(validate_rating(7.55).is_err());
    }
}

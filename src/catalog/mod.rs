//! Catalog Service
//!
//! CRUD and query operations over the movie collection. Every call is
//! independent: it loads a fresh copy from the record store, acts on it, and
//! (for mutations) saves the whole collection back. No state is cached
//! across operations.

pub mod search;
pub mod stats;
pub mod validation;

pub use search::SearchOutcome;
pub use stats::CatalogStats;

use crate::error::CatalogError;
use crate::store::MovieStore;
use crate::types::{Collection, Movie, MovieEntry, MIN_YEAR};
use rand::seq::IteratorRandom;
use tracing::info;

pub struct Catalog<S: MovieStore + ?Sized> {
    store: Box<S>,
}

impl<S: MovieStore + ?Sized> Catalog<S> {
    pub fn new(store: Box<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All records, ordered by title. An empty result means an empty
    /// catalog; the caller decides how to report that.
    pub fn list(&self) -> Result<Vec<Movie>, CatalogError> {
        let movies = self.store.load()?;
        Ok(to_rows(&movies))
    }

    pub fn add(
        &self,
        title: &str,
        year: i32,
        rating: f64,
        poster: &str,
    ) -> Result<(), CatalogError> {
        let mut movies = self.store.load()?;
        validation::validate_title(title, &movies)?;
        validation::validate_year(year)?;
        validation::validate_rating(rating)?;

        movies.insert(
            title.to_string(),
            MovieEntry {
                rating,
                year,
                poster: poster.to_string(),
            },
        );
        self.store.save(&movies)?;
        info!(title, year, rating, "movie added");
        Ok(())
    }

    pub fn delete(&self, title: &str) -> Result<(), CatalogError> {
        let mut movies = self.store.load()?;
        if movies.remove(title).is_none() {
            return Err(CatalogError::NotFound(title.to_string()));
        }
        self.store.save(&movies)?;
        info!(title, "movie deleted");
        Ok(())
    }

    /// Change only the rating; year, poster, and title stay untouched.
    pub fn update_rating(&self, title: &str, rating: f64) -> Result<(), CatalogError> {
        validation::validate_rating(rating)?;
        let mut movies = self.store.load()?;
        let entry = movies
            .get_mut(title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;
        entry.rating = rating;
        self.store.save(&movies)?;
        info!(title, rating, "movie rating updated");
        Ok(())
    }

    pub fn stats(&self) -> Result<CatalogStats, CatalogError> {
        let movies = self.store.load()?;
        stats::compute(&movies).ok_or(CatalogError::EmptyCatalog)
    }

    pub fn random_pick(&self) -> Result<Movie, CatalogError> {
        let movies = self.store.load()?;
        movies
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|(title, entry)| Movie::from_entry(title, entry))
            .ok_or(CatalogError::EmptyCatalog)
    }

    pub fn search(&self, term: &str) -> Result<SearchOutcome, CatalogError> {
        let movies = self.store.load()?;
        Ok(search::search(&movies, term))
    }

    /// Stable sort by rating, highest first.
    pub fn sort_by_rating(&self) -> Result<Vec<Movie>, CatalogError> {
        let movies = self.store.load()?;
        let mut rows = to_rows(&movies);
        rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(rows)
    }

    /// Stable sort by year, direction chosen by the caller.
    pub fn sort_by_year(&self, ascending: bool) -> Result<Vec<Movie>, CatalogError> {
        let movies = self.store.load()?;
        let mut rows = to_rows(&movies);
        if ascending {
            rows.sort_by_key(|m| m.year);
        } else {
            rows.sort_by_key(|m| std::cmp::Reverse(m.year));
        }
        Ok(rows)
    }

    /// Records with `rating >= min_rating` and `start_year <= year <=
    /// end_year`. Absent bounds default to no minimum rating, the earliest
    /// supported year, and the current year.
    pub fn filter(
        &self,
        min_rating: Option<f64>,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Result<Vec<Movie>, CatalogError> {
        let min_rating = min_rating.unwrap_or(0.0);
        let start_year = start_year.unwrap_or(MIN_YEAR);
        let end_year = end_year.unwrap_or_else(validation::current_year);

        let movies = self.store.load()?;
        Ok(movies
            .iter()
            .filter(|(_, e)| {
                e.rating >= min_rating && (start_year..=end_year).contains(&e.year)
            })
            .map(|(title, entry)| Movie::from_entry(title, entry))
            .collect())
    }
}

fn to_rows(movies: &Collection) -> Vec<Movie> {
    movies
        .iter()
        .map(|(title, entry)| Movie::from_entry(title, entry))
        .collect()
}

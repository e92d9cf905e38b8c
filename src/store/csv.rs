//! CSV-backed record store.
//!
//! Header row `title,year,rating,poster`, one data row per record. The
//! poster column may be empty but is always written.

use crate::error::StoreError;
use crate::store::{replace_file, MovieStore};
use crate::types::{Collection, MovieEntry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    year: i32,
    rating: f64,
    #[serde(default)]
    poster: String,
}

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn corrupt(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl MovieStore for CsvStore {
    fn load(&self) -> Result<Collection, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("store file {} absent, starting empty", self.path.display());
                return Ok(Collection::new());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        // a zero-byte file is as good as a missing one
        if content.trim().is_empty() {
            return Ok(Collection::new());
        }

        let mut reader = csv::Reader::from_reader(content.as_bytes());

        let headers = reader.headers().map_err(|e| self.corrupt(e.to_string()))?;
        for required in ["title", "year", "rating"] {
            if !headers.iter().any(|h| h == required) {
                return Err(self.corrupt(format!("missing '{}' column in header", required)));
            }
        }

        let mut movies = Collection::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| self.corrupt(e.to_string()))?;
            movies.insert(
                row.title,
                MovieEntry {
                    rating: row.rating,
                    year: row.year,
                    poster: row.poster,
                },
            );
        }
        Ok(movies)
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        // write the header ourselves so an empty collection still produces
        // a parseable file
        writer
            .write_record(["title", "year", "rating", "poster"])
            .map_err(|e| self.corrupt(e.to_string()))?;
        for (title, entry) in collection {
            writer
                .serialize(CsvRow {
                    title: title.clone(),
                    year: entry.year,
                    rating: entry.rating,
                    poster: entry.poster.clone(),
                })
                .map_err(|e| self.corrupt(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| self.corrupt(e.to_string()))?;
        replace_file(&self.path, &bytes)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

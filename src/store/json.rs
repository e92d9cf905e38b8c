//! JSON-backed record store.
//!
//! The backing file is a single object keyed by title:
//! `{"Titanic": {"rating": 9.2, "year": 1997, "poster": "..."}}`.

use crate::error::StoreError;
use crate::store::{replace_file, MovieStore};
use crate::types::Collection;
use std::path::{Path, PathBuf};

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl MovieStore for JsonStore {
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

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(collection).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: format!("failed to serialize collection: {}", e),
            })?;
        replace_file(&self.path, json.as_bytes())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovieEntry;
    use tempfile::TempDir;

    fn entry(rating: f64, year: i32) -> MovieEntry {
        MovieEntry {
            rating,
            year,
            poster: String::new(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("movies.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("movies.json"));

        let mut movies = Collection::new();
        movies.insert("Titanic".to_string(), entry(9.2, 1997));
        movies.insert(
            "Alien".to_string(),
            MovieEntry {
                rating: 8.5,
                year: 1979,
                poster: "https://example.com/alien.jpg".to_string(),
            },
        );

        store.save(&movies).unwrap();
        assert_eq!(store.load().unwrap(), movies);
    }

    #[test]
    fn poster_defaults_to_empty_on_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, r#"{"Heat": {"rating": 8.3, "year": 1995}}"#).unwrap();

        let store = JsonStore::new(path);
        let movies = store.load().unwrap();
        assert_eq!(movies["Heat"].poster, "");
    }

    #[test]
    fn malformed_json_is_corrupt_not_io() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("movies.json"));
        store.save(&Collection::new()).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["movies.json".to_string()]);
    }
}

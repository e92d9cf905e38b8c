//! Movie Record Store
//!
//! Durable whole-collection load/save behind a uniform contract, hiding the
//! differences between the JSON and CSV backing formats.

pub mod csv;
pub mod json;

pub use self::csv::CsvStore;
pub use self::json::JsonStore;

use crate::error::{ConfigError, StoreError};
use crate::types::Collection;
use std::fs;
use std::path::{Path, PathBuf};

/// Backing file format, selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Csv,
}

impl StoreFormat {
    /// Infer the format from a file extension; defaults to JSON when the
    /// extension is missing or unknown.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => StoreFormat::Csv,
            _ => StoreFormat::Json,
        }
    }

    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(StoreFormat::Json),
            "csv" => Ok(StoreFormat::Csv),
            other => Err(ConfigError(format!(
                "unknown storage format '{}' (expected json or csv)",
                other
            ))),
        }
    }
}

/// Record Store interface.
///
/// `load` after `save(c)` must reproduce `c` modulo numeric formatting.
/// A missing backing file is first-run bootstrap, not an error.
pub trait MovieStore {
    fn load(&self) -> Result<Collection, StoreError>;
    fn save(&self, collection: &Collection) -> Result<(), StoreError>;

    /// Path of the backing file (for reporting).
    fn path(&self) -> &Path;
}

/// Open a store for the given path, inferring the format when none is given.
pub fn open_store(path: PathBuf, format: Option<StoreFormat>) -> Box<dyn MovieStore> {
    let format = format.unwrap_or_else(|| StoreFormat::from_path(&path));
    match format {
        StoreFormat::Json => Box::new(JsonStore::new(path)),
        StoreFormat::Csv => Box::new(CsvStore::new(path)),
    }
}

/// Replace `path` with `contents` via a temp file in the same directory
/// followed by a rename, so an interrupted write cannot truncate the
/// previous state.
pub(crate) fn replace_file(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(|source| StoreError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_inferred_from_extension() {
        assert_eq!(
            StoreFormat::from_path(Path::new("movies.csv")),
            StoreFormat::Csv
        );
        assert_eq!(
            StoreFormat::from_path(Path::new("movies.CSV")),
            StoreFormat::Csv
        );
        assert_eq!(
            StoreFormat::from_path(Path::new("movies.json")),
            StoreFormat::Json
        );
        assert_eq!(
            StoreFormat::from_path(Path::new("movies")),
            StoreFormat::Json
        );
    }

    #[test]
    fn format_parse_rejects_unknown() {
        assert_eq!(StoreFormat::parse("json").unwrap(), StoreFormat::Json);
        assert_eq!(StoreFormat::parse("CSV").unwrap(), StoreFormat::Csv);
        assert!(StoreFormat::parse("yaml").is_err());
    }
}

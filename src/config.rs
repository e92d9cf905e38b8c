//! Configuration loading.
//!
//! Precedence, highest to lowest: CLI flags, `CINELOG_*` environment
//! variables, the TOML config file, built-in defaults. The config file
//! lives at the platform config dir (`~/.config/cinelog/config.toml` on
//! Linux) unless a path is given explicitly.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "movies.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file path; default `movies.json` in the working directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// "json" or "csv"; default inferred from the file extension.
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// OMDb API key; lookups are disabled without one.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Load from an explicit file, or from the default location when that
    /// exists, then apply environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// CINELOG_STORAGE_FILE, CINELOG_STORAGE_FORMAT, CINELOG_OMDB_API_KEY,
    /// CINELOG_LOG (level).
    fn apply_env_overrides(&mut self) {
        if let Some(file) = non_empty_env("CINELOG_STORAGE_FILE") {
            self.storage.file = Some(PathBuf::from(file));
        }
        if let Some(format) = non_empty_env("CINELOG_STORAGE_FORMAT") {
            self.storage.format = Some(format);
        }
        if let Some(key) = non_empty_env("CINELOG_OMDB_API_KEY") {
            self.metadata.api_key = Some(key);
        }
        if let Some(level) = non_empty_env("CINELOG_LOG") {
            self.logging.level = level;
        }
    }

    pub fn store_file(&self) -> PathBuf {
        self.storage
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// `~/.config/cinelog/config.toml` (platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "cinelog", "cinelog")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

//! Logging System
//!
//! Structured logging via `tracing`. Defaults to a log file under the
//! platform state directory so diagnostics never interleave with the
//! interactive menu on the terminal.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file (default: file)
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output is file; None means the runtime default
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "file".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
        }
    }
}

/// Resolve the log file path with precedence: CLI, CINELOG_LOG_FILE env,
/// config file, platform state directory default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(p) = cli_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    if let Ok(env_path) = std::env::var("CINELOG_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    if let Some(p) = config_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, ConfigError> {
    let project_dirs = directories::ProjectDirs::from("", "cinelog", "cinelog").ok_or_else(|| {
        ConfigError("could not determine platform state directory for log file".to_string())
    })?;
    let state_dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_dir())
        .to_path_buf();
    Ok(state_dir.join("cinelog.log"))
}

/// Initialize the logging system.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    if !config.enabled {
        Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(|| std::io::sink()))
            .init();
        return Ok(());
    }

    let filter = EnvFilter::try_from_env("CINELOG_LOG")
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError(format!("invalid log level '{}': {}", config.level, e)))?;

    let base = Registry::default().with(filter);

    match config.output.as_str() {
        "stderr" => {
            if config.format == "json" {
                base.with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
            } else {
                base.with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
            }
        }
        "file" => {
            let log_file = resolve_log_file_path(None, config.file.clone())?;
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError(format!("failed to create log directory: {}", e))
                })?;
            }
            let writer = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .map_err(|e| {
                    ConfigError(format!("failed to open log file {:?}: {}", log_file, e))
                })?;

            if config.format == "json" {
                base.with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(writer),
                )
                .init();
            } else {
                base.with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            }
        }
        other => {
            return Err(ConfigError(format!(
                "unknown log output '{}' (expected stderr or file)",
                other
            )))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "text");
        assert_eq!(config.output, "file");
        assert!(config.file.is_none());
    }

    #[test]
    fn cli_path_wins() {
        let resolved = resolve_log_file_path(
            Some(PathBuf::from("/tmp/cli.log")),
            Some(PathBuf::from("/tmp/config.log")),
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/cli.log"));
    }

    #[test]
    fn config_path_used_without_cli() {
        let resolved =
            resolve_log_file_path(None, Some(PathBuf::from("/tmp/config.log"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/config.log"));
    }
}

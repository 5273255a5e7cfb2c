//! `[logging]` section
//!
//! The TUI keeps its own log buffer; this section only decides how chatty
//! classdash is and whether a JSON copy lands on disk.

use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

/// Levels accepted in `[logging] level`
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How often the JSON log file starts over
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    /// Anything unrecognised keeps the daily file
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    pub fn rotation(&self) -> Rotation {
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error. RUST_LOG takes over when set.
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// `[logging]` as written in config.toml
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let Some(file) = file else {
            return Self::default();
        };
        let defaults = Self::default();

        Self {
            level: file
                .level
                .and_then(|l| normalize_level(&l))
                .unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map_or(defaults.file_dir, PathBuf::from),
            file_rotation: file
                .file_rotation
                .map_or(defaults.file_rotation, |r| LogRotation::from_str(&r)),
            file_prefix: file
                .file_prefix
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.file_prefix),
        }
    }

    /// EnvFilter directive scoping the level to this crate's events
    pub fn filter_directive(&self) -> String {
        let level = normalize_level(&self.level).unwrap_or_else(|| "info".to_string());
        format!("{}={}", env!("CARGO_CRATE_NAME"), level)
    }
}

fn normalize_level(level: &str) -> Option<String> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS.contains(&level.as_str()).then_some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_normalized_or_dropped() {
        let file = FileLogging {
            level: Some(" DEBUG ".to_string()),
            ..FileLogging::default()
        };
        assert_eq!(LoggingConfig::from_file(Some(file)).level, "debug");

        let file = FileLogging {
            level: Some("chatty".to_string()),
            ..FileLogging::default()
        };
        assert_eq!(LoggingConfig::from_file(Some(file)).level, "info");
    }

    #[test]
    fn filter_directive_targets_the_crate() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(config.filter_directive(), "classdash=warn");
    }

    #[test]
    fn blank_prefix_keeps_default() {
        let file = FileLogging {
            file_prefix: Some("  ".to_string()),
            file_rotation: Some("Hourly".to_string()),
            ..FileLogging::default()
        };
        let config = LoggingConfig::from_file(Some(file));
        assert_eq!(config.file_prefix, "classdash");
        assert_eq!(config.file_rotation, LogRotation::Hourly);
    }
}

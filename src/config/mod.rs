//! Configuration for the dashboard
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/classdash/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Nothing academic or session-related is ever written here. The access
//! token is read from the environment at runtime only.

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod api;
mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use api::{ApiConfig, FileApi, FileIdentity, IdentityConfig};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable names
pub mod env {
    pub const THEME: &str = "CLASSDASH_THEME";
    pub const CLASSES_URL: &str = "CLASSDASH_CLASSES_URL";
    pub const DATA_URL: &str = "CLASSDASH_DATA_URL";
    pub const USERINFO_URL: &str = "CLASSDASH_USERINFO_URL";
    pub const CLIENT_ID: &str = "CLASSDASH_CLIENT_ID";
    pub const DEMO: &str = "CLASSDASH_DEMO";
    pub const ACCESS_TOKEN: &str = "CLASSDASH_ACCESS_TOKEN";
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme mode
// ─────────────────────────────────────────────────────────────────────────────

/// Light or dark palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse theme string from config (unknown values fall back to dark)
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial palette; toggled at runtime with 't'
    pub theme: ThemeMode,

    /// Backend endpoints
    pub api: ApiConfig,

    /// Identity provider settings
    pub identity: IdentityConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Demo mode: canned data instead of the real backend (runtime only)
    pub demo_mode: bool,

    /// Access token handed over by the identity provider (runtime only)
    pub access_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            api: ApiConfig::default(),
            identity: IdentityConfig::default(),
            logging: LoggingConfig::default(),
            demo_mode: false,
            access_token: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [api] section
    pub api: Option<FileApi>,

    /// Optional [identity] section
    pub identity: Option<FileIdentity>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/classdash/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("classdash").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists.
    ///
    /// A config file that exists but cannot be read or parsed ends the
    /// process with a banner; silently falling back to defaults would point
    /// the dashboard at the wrong backend.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around URLs");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names ([api], [identity], [logging])\n");
                    eprintln!("  To reset, run `classdash config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = lookup(env::THEME)
            .or(file.theme)
            .map(|s| ThemeMode::from_str(&s))
            .unwrap_or_default();

        let mut api = ApiConfig::from_file(file.api);
        if let Some(url) = lookup(env::CLASSES_URL) {
            api.classes_url = url;
        }
        if let Some(url) = lookup(env::DATA_URL) {
            api.data_url = url;
        }
        if let Some(url) = lookup(env::USERINFO_URL) {
            api.userinfo_url = url;
        }

        let mut identity = IdentityConfig::from_file(file.identity);
        if let Some(client_id) = lookup(env::CLIENT_ID) {
            identity.client_id = Some(client_id);
        }

        let logging = LoggingConfig::from_file(file.logging);

        // Demo mode: env only (runtime flag)
        let demo_mode = lookup(env::DEMO)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        // Access token: env only, never persisted
        let access_token = lookup(env::ACCESS_TOKEN).filter(|t| !t.trim().is_empty());

        Self {
            theme,
            api,
            identity,
            logging,
            demo_mode,
            access_token,
        }
    }
}

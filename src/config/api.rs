//! Backend and identity provider settings

use serde::Deserialize;

/// Default class list endpoint
pub const DEFAULT_CLASSES_URL: &str =
    "https://bvsrauoaua.execute-api.ap-south-1.amazonaws.com/getClasses";

/// Default course data endpoint
pub const DEFAULT_DATA_URL: &str =
    "https://bvsrauoaua.execute-api.ap-south-1.amazonaws.com/getData";

/// Default user-info endpoint of the identity provider
pub const DEFAULT_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Public OAuth client identifier (not a secret)
pub const DEFAULT_CLIENT_ID: &str =
    "1022922383898-l1g1ljhqsfiujdff5dp5m0k02k6mtmqc.apps.googleusercontent.com";

// ─────────────────────────────────────────────────────────────────────────────
// API endpoints
// ─────────────────────────────────────────────────────────────────────────────

/// Records backend endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// GET, returns the selectable classes
    pub classes_url: String,
    /// POST, returns the course array for one student
    pub data_url: String,
    /// GET with a bearer token, returns the user profile
    pub userinfo_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            classes_url: DEFAULT_CLASSES_URL.to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            userinfo_url: DEFAULT_USERINFO_URL.to_string(),
        }
    }
}

/// [api] section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileApi {
    pub classes_url: Option<String>,
    pub data_url: Option<String>,
    pub userinfo_url: Option<String>,
}

impl ApiConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileApi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            classes_url: file.classes_url.unwrap_or(defaults.classes_url),
            data_url: file.data_url.unwrap_or(defaults.data_url),
            userinfo_url: file.userinfo_url.unwrap_or(defaults.userinfo_url),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Identity provider
// ─────────────────────────────────────────────────────────────────────────────

/// Identity provider settings
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityConfig {
    /// OAuth client the access token was issued for; shown on the login
    /// screen so the user knows which consent to grant
    pub client_id: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            client_id: Some(DEFAULT_CLIENT_ID.to_string()),
        }
    }
}

/// [identity] section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileIdentity {
    pub client_id: Option<String>,
}

impl IdentityConfig {
    /// Create from file config with defaults. An empty string disables the
    /// hint.
    pub fn from_file(file: Option<FileIdentity>) -> Self {
        let file = file.unwrap_or_default();
        match file.client_id {
            Some(id) if id.trim().is_empty() => Self { client_id: None },
            Some(id) => Self { client_id: Some(id) },
            None => Self::default(),
        }
    }
}

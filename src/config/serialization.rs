//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize the persisted subset of the config to a commented TOML file.
    ///
    /// Runtime-only values (demo mode, access token) are never written.
    pub fn to_toml(&self) -> String {
        let client_id = self.identity.client_id.as_deref().unwrap_or_default();

        format!(
            r#"# classdash configuration

# Palette: dark, light (press 't' in the TUI to toggle)
theme = "{theme}"

# Records backend endpoints
[api]
classes_url = "{classes_url}"
data_url = "{data_url}"
userinfo_url = "{userinfo_url}"

# Identity provider the access token comes from.
# The access token itself is read from CLASSDASH_ACCESS_TOKEN or --token
# and is never stored here. Leave client_id empty to hide the login hint.
[identity]
client_id = "{client_id}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme.as_str(),
            classes_url = self.api.classes_url,
            data_url = self.api.data_url,
            userinfo_url = self.api.userinfo_url,
            client_id = client_id,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::validation;

// Default configuration
pub const DEFAULT_HOST: &str = "https://qa.corider.in";
pub const CHAT_PATH: &str = "/assignment/chat";
pub const HOST_ENV_VAR: &str = "TRIPCHAT_HOST";

/// Read-only application settings. Every field falls back to its default
/// when missing from `settings.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Scheme and authority of the chat endpoint, e.g. `https://qa.corider.in`
    pub host: String,
    pub request_timeout_secs: u64,
    pub theme: String,
    /// Show a modal alert when a page fails to load
    pub alert_on_error: bool,
    pub composer_placeholder: String,
    /// Fraction of the viewport from the top at which older pages load
    pub load_more_threshold: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            request_timeout_secs: 15,
            theme: "light".to_string(),
            alert_on_error: true,
            composer_placeholder: "Reply to @Rohit Yadav".to_string(),
            load_more_threshold: 0.1,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_host(&self.host).map_err(ConfigError::Invalid)?;
        validation::validate_timeout_secs(self.request_timeout_secs)
            .map_err(ConfigError::Invalid)?;
        validation::validate_threshold(self.load_more_threshold).map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Apply an explicit host override (normally `TRIPCHAT_HOST`).
    pub fn with_host_override(mut self, host: Option<String>) -> Self {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }
        self
    }

    /// Full URL of the chat endpoint for a page.
    pub fn endpoint_url(&self, page: u32) -> String {
        format!("{}{}?page={}", self.host.trim_end_matches('/'), CHAT_PATH, page)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "corider", "tripchat").map(|proj| proj.config_dir().join("settings.json"))
}

/// Load settings from an explicit path. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let settings: Settings = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from the platform config directory, then apply the
/// environment host override. Problems are logged and defaults used.
pub fn load_settings() -> Settings {
    resolve_settings(settings_path().as_deref(), std::env::var(HOST_ENV_VAR).ok())
}

/// Settings from `path` (if any) with `host_override` applied. An unusable
/// file falls back to defaults; an invalid override is ignored on its own.
pub fn resolve_settings(path: Option<&Path>, host_override: Option<String>) -> Settings {
    let settings = match path {
        Some(path) => match load_settings_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unusable settings file");
                Settings::default()
            }
        },
        None => {
            tracing::warn!("Could not determine config directory, using defaults");
            Settings::default()
        }
    };

    match host_override {
        Some(host) if validation::validate_host(host.trim()).is_err() => {
            tracing::warn!(host = %host, env = HOST_ENV_VAR, "Ignoring invalid host override");
            settings
        }
        other => settings.with_host_override(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{ "host": "http://127.0.0.1:9000", "theme": "dark" }"#)
            .unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.host, "http://127.0.0.1:9000");
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.request_timeout_secs, 15);
        assert!(settings.alert_on_error);
    }

    #[test]
    fn test_invalid_host_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "host": "qa.corider.in" }"#).unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ host: ").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_endpoint_url() {
        let settings = Settings::default();
        assert_eq!(
            settings.endpoint_url(0),
            "https://qa.corider.in/assignment/chat?page=0"
        );

        let settings = Settings::default().with_host_override(Some("http://localhost:8080/".into()));
        assert_eq!(
            settings.endpoint_url(7),
            "http://localhost:8080/assignment/chat?page=7"
        );
    }

    #[test]
    fn test_invalid_override_keeps_file_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "theme": "dark", "request_timeout_secs": 42 }"#).unwrap();

        let settings = resolve_settings(Some(&path), Some("not-a-url".into()));
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.request_timeout_secs, 42);
        assert_eq!(settings.host, DEFAULT_HOST);
    }

    #[test]
    fn test_valid_override_applies_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "host": "http://127.0.0.1:9000", "theme": "dark" }"#).unwrap();

        let settings = resolve_settings(Some(&path), Some(" http://localhost:8080 ".into()));
        assert_eq!(settings.host, "http://localhost:8080");
        assert_eq!(settings.theme, "dark");

        let settings = resolve_settings(None, None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_blank_override_ignored() {
        let settings = Settings::default().with_host_override(Some("  ".into()));
        assert_eq!(settings.host, DEFAULT_HOST);
        let settings = Settings::default().with_host_override(None);
        assert_eq!(settings.host, DEFAULT_HOST);
    }
}

//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/passkeep)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/passkeep)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "passkeep", "passkeep")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        };

        // Ensure directories exist
        fs::create_dir_all(&paths.config_dir)?;
        fs::create_dir_all(&paths.data_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the path to the default credential backing file.
    pub fn credentials_file(&self) -> PathBuf {
        self.data_dir.join("data.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Email to use when a credential is added without one.
    pub default_email: String,
    /// Backing-file override; the XDG data dir is used when unset.
    pub credentials_file: Option<PathBuf>,
    /// Copy generated passwords to the clipboard by default.
    pub auto_copy: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_email: String::new(),
            credentials_file: None,
            auto_copy: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = Paths::get();
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::get();
        let file = paths.settings_file();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&file, content).map_err(|e| ConfigError::WriteFailed {
            path: file,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(settings.default_email.is_empty());
        assert!(settings.credentials_file.is_none());
        assert!(settings.auto_copy);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings {
            default_email: "me@example.com".to_string(),
            credentials_file: Some(PathBuf::from("/tmp/vault.json")),
            auto_copy: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_email, settings.default_email);
        assert_eq!(parsed.credentials_file, settings.credentials_file);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let parsed: AppSettings =
            serde_json::from_str(r#"{"default_email": "me@example.com"}"#).unwrap();
        assert_eq!(parsed.default_email, "me@example.com");
        assert!(parsed.auto_copy);
    }
}

//! Configuration management for Folio

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::locale::{LOCALE_PREFERENCE_KEY, PreferenceStore};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub account whose projects are aggregated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected display locale, stored as one preference entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".folio").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        Self::load_from(path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        self.save_to(path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }
}

impl PreferenceStore for Config {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            LOCALE_PREFERENCE_KEY => self.preferences.locale.clone(),
            _ => None,
        }
    }

    // The value is written to disk when the caller saves the config.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            LOCALE_PREFERENCE_KEY => {
                self.preferences.locale = Some(value.to_string());
                Ok(())
            }
            _ => Err(ConfigError::Invalid(format!("Unknown preference key: {}", key)).into()),
        }
    }
}

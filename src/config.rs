//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

use crate::consts::cli_consts::THEME_PALETTE;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Selected theme color as a "#rrggbb" hex string.
    pub theme: String,
    /// Data file to load when `--data` is not supplied.
    pub data_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: THEME_PALETTE[0].1.to_string(),
            data_path: None,
        }
    }
}

/// Path of the configuration file: `~/.vitalboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = std::env::var_os("HOME").ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "HOME environment variable is not set",
        )
    })?;
    Ok(PathBuf::from(home).join(".vitalboard").join("config.json"))
}

impl Config {
    /// Create Config with the given theme and data path.
    pub fn new(theme: String, data_path: Option<String>) -> Self {
        Config { theme, data_path }
    }

    /// Index of the configured theme in the palette, defaulting to the
    /// first entry when the hex is unknown.
    pub fn theme_index(&self) -> usize {
        THEME_PALETTE
            .iter()
            .position(|(_, hex)| hex.eq_ignore_ascii_case(&self.theme))
            .unwrap_or(0)
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(".vitalboard").join("config.json");

        let config = Config::new("#2e86de".to_string(), Some("vitals.csv".to_string()));
        config.save(&path).expect("save config");

        let loaded = Config::load_from_file(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("config.json");
        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("config.json");
        Config::default().save(&path).expect("save config");
        assert!(path.exists());

        Config::clear(&path).expect("clear config");
        assert!(!path.exists());

        // Clearing an absent file is not an error
        Config::clear(&path).expect("clear absent config");
    }

    #[test]
    fn test_theme_index_falls_back_to_default() {
        assert_eq!(Config::default().theme_index(), 0);
        assert_eq!(Config::new("#2e86de".into(), None).theme_index(), 2);
        assert_eq!(Config::new("not-a-color".into(), None).theme_index(), 0);
    }
}

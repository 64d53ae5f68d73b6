//! # Configuration
//!
//! Settings live in `config.json` inside the roster config directory.
//!
//! ## Location
//!
//! Resolved in priority order:
//! 1. `--config-dir <DIR>` on the command line
//! 2. `ROSTER_CONFIG_DIR` environment variable
//! 3. The OS config directory (via the `directories` crate)
//!
//! A missing file means all defaults. Missing keys take their defaults too.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page-size` | `10` | Records per table page, fixed for a session |
//! | `max-name-len` | `30` | Longest accepted full name, in characters |
//! | `max-email-len` | `30` | Longest accepted email, in characters |

use crate::error::{Result, RosterError};
use crate::form::{FieldLimits, DEFAULT_MAX_EMAIL_LEN, DEFAULT_MAX_NAME_LEN};
use crate::pagination::DEFAULT_PAGE_SIZE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

pub const KEYS: [&str; 3] = ["page-size", "max-name-len", "max-email-len"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    #[serde(default = "default_max_email_len")]
    pub max_email_len: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE.get()
}

fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}

fn default_max_email_len() -> usize {
    DEFAULT_MAX_EMAIL_LEN
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_name_len: default_max_name_len(),
            max_email_len: default_max_email_len(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| RosterError::Config("page-size must be at least 1".to_string()))
    }

    pub fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            max_name_len: self.max_name_len,
            max_email_len: self.max_email_len,
        }
    }

    pub fn get(&self, key: &str) -> Result<usize> {
        match key {
            "page-size" => Ok(self.page_size),
            "max-name-len" => Ok(self.max_name_len),
            "max-email-len" => Ok(self.max_email_len),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: usize = value.trim().parse().map_err(|_| {
            RosterError::Config(format!("{} expects a whole number, got '{}'", key, value))
        })?;
        match key {
            "page-size" => {
                if parsed == 0 {
                    return Err(RosterError::Config(
                        "page-size must be at least 1".to_string(),
                    ));
                }
                self.page_size = parsed;
            }
            "max-name-len" => self.max_name_len = parsed,
            "max-email-len" => self.max_email_len = parsed,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> RosterError {
    RosterError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

/// Where `config.json` lives when no override is given.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine config dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.field_limits(), FieldLimits::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::load(temp_dir.path().join("nowhere")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = RosterConfig::default();
        config.set("page-size", "5").unwrap();
        config.save(&dir).unwrap();

        let loaded = RosterConfig::load(&dir).unwrap();
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.page_size().unwrap().get(), 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();

        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.max_name_len, 30);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            RosterConfig::load(temp_dir.path()),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = RosterConfig::default();
        assert!(config.set("page-size", "0").is_err());

        config.page_size = 0;
        assert!(matches!(config.page_size(), Err(RosterError::Config(_))));
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = RosterConfig::default();
        config.set("max-email-len", "64").unwrap();
        assert_eq!(config.get("max-email-len").unwrap(), 64);
        assert!(config.set("max-email-len", "lots").is_err());
        assert!(config.get("colour").is_err());
        assert!(config.set("colour", "1").is_err());
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_config_dir(Some(PathBuf::from("/tmp/roster-here"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/roster-here"));
    }
}

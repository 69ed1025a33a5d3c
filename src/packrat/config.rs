use crate::error::{PackratError, Result};
use crate::profile::ProfileKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// User settings, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackratConfig {
    /// Profile to open directly; `None` shows the profile picker.
    #[serde(default)]
    pub profile: Option<ProfileKind>,

    /// Overrides the profile's fixed capacity (or initial size when growable).
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Colored output when the terminal supports it.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for PackratConfig {
    fn default() -> Self {
        Self {
            profile: None,
            capacity: None,
            color: default_color(),
        }
    }
}

/// Keys accepted by [`PackratConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["profile", "capacity", "color"];

impl PackratConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PackratConfig = serde_json::from_str(&content)?;
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

    /// Current value of `key`, formatted for display.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "profile" => Ok(self
                .profile
                .map(|p| p.to_string())
                .unwrap_or_else(|| "(ask)".to_string())),
            "capacity" => Ok(self
                .capacity
                .map(|c| c.to_string())
                .unwrap_or_else(|| "(profile default)".to_string())),
            "color" => Ok(self.color.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parses and sets `key`. `none` clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let clears = value.eq_ignore_ascii_case("none");
        match key {
            "profile" if clears => self.profile = None,
            "profile" => {
                self.profile = Some(value.parse().map_err(PackratError::Config)?);
            }
            "capacity" if clears => self.capacity = None,
            "capacity" => {
                let capacity: usize = value
                    .parse()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        PackratError::Config(format!(
                            "capacity must be a positive integer, got '{}'",
                            value
                        ))
                    })?;
                self.capacity = Some(capacity);
            }
            "color" => {
                self.color = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => {
                        return Err(PackratError::Config(format!(
                            "color must be true or false, got '{}'",
                            value
                        )));
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> PackratError {
    PackratError::Config(format!(
        "unknown key '{}' (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PackratConfig::default();
        assert_eq!(config.profile, None);
        assert_eq!(config.capacity, None);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = PackratConfig::load(temp_dir.path().join("nowhere")).unwrap();
        assert_eq!(config, PackratConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = PackratConfig::default();
        config.set("profile", "tower").unwrap();
        config.set("capacity", "5").unwrap();
        config.set("color", "off").unwrap();
        config.save(&dir).unwrap();

        let loaded = PackratConfig::load(&dir).unwrap();
        assert_eq!(loaded.profile, Some(ProfileKind::Tower));
        assert_eq!(loaded.capacity, Some(5));
        assert!(!loaded.color);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"profile":"master"}"#).unwrap();
        let loaded = PackratConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.profile, Some(ProfileKind::Master));
        assert!(loaded.color);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            PackratConfig::load(temp_dir.path()),
            Err(PackratError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PackratConfig::default();
        assert!(config.set("capacity", "0").is_err());
        assert!(config.set("capacity", "lots").is_err());
        assert!(config.set("profile", "wizard").is_err());
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("volume", "11").is_err());
        assert_eq!(config, PackratConfig::default());
    }

    #[test]
    fn test_none_clears_optional_keys() {
        let mut config = PackratConfig::default();
        config.set("capacity", "3").unwrap();
        config.set("capacity", "none").unwrap();
        assert_eq!(config.capacity, None);
        assert_eq!(config.get("capacity").unwrap(), "(profile default)");
        assert_eq!(config.get("profile").unwrap(), "(ask)");
    }
}

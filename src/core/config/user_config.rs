//! User configuration file handling
//!
//! Manages settings from ~/.config/zonecheck/settings.json

use crate::core::settings::CheckSettings;
use crate::geometry::NeighborLookup;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/zonecheck/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    /// Upper bound for the near-zone tolerance (built-in default: 4)
    pub default_tolerance: Option<f64>,
    /// "linear" (default) or "circular"
    pub neighbor_lookup: Option<NeighborLookup>,
    /// Report a node only once when it is near several zones
    pub deduplicate: Option<bool>,
}

impl ConfigFile {
    /// Get the path to the zonecheck config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("zonecheck")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => {
                debug!("Loaded user settings from {:?}", path);
                Some(config)
            }
            Err(e) => {
                warn!("Ignoring settings.json: {:#}", e);
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Apply the values present in this file on top of `settings`
    pub fn apply_to(&self, settings: &mut CheckSettings) {
        if let Some(tolerance) = self.default_tolerance {
            if tolerance > 0.0 && tolerance.is_finite() {
                settings.default_tolerance = tolerance;
            } else {
                warn!("Ignoring non-positive default_tolerance {} in settings.json", tolerance);
            }
        }
        if let Some(lookup) = self.neighbor_lookup {
            settings.neighbor_lookup = lookup;
        }
        if let Some(deduplicate) = self.deduplicate {
            settings.deduplicate = deduplicate;
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/zonecheck directory
    /// 2. A settings.json file with the built-in defaults
    /// 3. A logs/ directory for application logs
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();

        // Create the main config directory
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = crate::logging::logs_dir();
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            let defaults = CheckSettings::default();
            let example = ConfigFile {
                default_tolerance: Some(defaults.default_tolerance),
                neighbor_lookup: Some(defaults.neighbor_lookup),
                deduplicate: Some(defaults.deduplicate),
            };
            example.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let config = ConfigFile {
            default_tolerance: Some(3.0),
            neighbor_lookup: Some(NeighborLookup::Circular),
            deduplicate: None,
        };

        config.save_to(&path).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "neighbor_lookup": "circular" }"#).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.neighbor_lookup, Some(NeighborLookup::Circular));
        assert_eq!(loaded.default_tolerance, None);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let err = ConfigFile::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("settings.json"));
    }

    #[test]
    fn test_apply_to_overrides_present_fields() {
        let mut settings = CheckSettings::default();
        ConfigFile {
            default_tolerance: Some(6.0),
            neighbor_lookup: None,
            deduplicate: Some(true),
        }
        .apply_to(&mut settings);

        assert_eq!(settings.default_tolerance, 6.0);
        assert_eq!(settings.neighbor_lookup, NeighborLookup::Linear);
        assert!(settings.deduplicate);
    }

    #[test]
    fn test_apply_to_rejects_bad_tolerance() {
        let mut settings = CheckSettings::default();
        ConfigFile {
            default_tolerance: Some(-1.0),
            ..ConfigFile::default()
        }
        .apply_to(&mut settings);
        assert_eq!(settings.default_tolerance, 4.0);
    }
}

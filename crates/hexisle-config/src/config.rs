//! Configuration structs and RON persistence.

use std::path::{Path, PathBuf};

use hexisle_terrain::TerrainConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Island generation parameters.
    pub terrain: TerrainConfig,
    /// Logging and debug output.
    pub debug: DebugConfig,
}

/// Logging and debug output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter (e.g. "debug", "info", "hexisle_terrain=debug").
    pub log_level: String,
    /// Write a top-down band map PNG here after generating.
    pub band_map: Option<PathBuf>,
    /// Write a top-down height map PNG here after generating.
    pub height_map: Option<PathBuf>,
    /// Side length of the debug maps in pixels.
    pub map_size: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            band_map: None,
            height_map: None,
            map_size: 512,
        }
    }
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there if it does not exist.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save to `config_dir/config.ron`, creating the directory if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE_NAME), serialized)
            .map_err(ConfigError::WriteError)
    }

    /// Re-read the file. Returns `Some` only if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Check the terrain section without generating anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terrain.validate()?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use hexisle_terrain::{DecorationTable, TerrainBand};

    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("scan_extent: 15"));
        assert!(ron_str.contains("cutoff_radius: 16.0"));
        assert!(ron_str.contains("log_level: \"info\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.terrain.seed = Some(1234);
        config.debug.band_map = Some(PathBuf::from("bands.png"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(debug: (log_level: \"debug\"))").unwrap();
        assert_eq!(config.terrain, TerrainConfig::default());
        assert_eq!(config.debug.log_level, "debug");
        assert_eq!(config.debug.map_size, 512);
    }

    #[test]
    fn test_nested_terrain_fields_use_defaults() {
        let ron_str = "(terrain: (thresholds: (stone: 0.9), decorations: []))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.terrain.thresholds.stone, 0.9);
        assert_eq!(config.terrain.thresholds.dirt, 0.7);
        assert_eq!(config.terrain.decorations, DecorationTable::empty());
    }

    #[test]
    fn test_custom_decoration_rules_parse() {
        let ron_str = "(terrain: (decorations: [(band: Sand, prop: Broadleaf, probability: 0.5, target: Grass)]))";
        let config: Config = ron::from_str(ron_str).unwrap();
        let rules = config.terrain.decorations.rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].band, TerrainBand::Sand);
        assert_eq!(rules[0].probability, 0.5);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("hexisle");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.max_height = 14.0;
        config.terrain.scenery = false;
        config.debug.map_size = 256;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.terrain.cutoff_radius = 10.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().terrain.cutoff_radius, 10.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::default().reload(dir.path());
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validate_reports_bad_terrain() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        config.terrain.max_height = -2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTerrain(_))
        ));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// island settings\n(\n  // nothing here yet\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}

use log::warn;

use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::search::SearchConfig;
use crate::{HEIGHT, WIDTH};

/// Deepest useful search: one ply per cell
pub const MAX_DEPTH: usize = WIDTH * HEIGHT;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_one_ai: bool,
    pub player_two_ai: bool,
    /// Shortest time a computer move appears to take, in milliseconds
    pub min_think_ms: u64,
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_one_ai: false,
            player_two_ai: true,
            min_think_ms: 1000,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {}",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    pub fn min_think_time(&self) -> Duration {
        Duration::from_millis(self.min_think_ms)
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.depth, 5);
        assert!(config.search.alpha_beta);
        assert_eq!(config.min_think_time(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
player_one_ai = true

[search]
depth = 3
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 3);
        assert!(config.search.alpha_beta);
        assert!(config.player_one_ai);
        assert!(config.player_two_ai);
        assert_eq!(config.min_think_ms, 1000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = GameConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = GameConfig::default();
        config.search.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
        config.search.depth = MAX_DEPTH;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
min_think_ms = 0

[search]
alpha_beta = false
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.min_think_ms, 0);
        assert!(!config.search.alpha_beta);
        assert_eq!(config.search.depth, 5);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[search\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml().unwrap();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::fs;
use std::time::Duration;
use anyhow::Result;

use crate::models::DEFAULT_PER_PAGE;

pub const DEFAULT_LATENCY_MS: u64 = 300;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Fixture to seed from; the embedded one is used when unset.
    pub fixture_path: Option<PathBuf>,
    pub latency_ms: u64,
    pub default_per_page: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            latency_ms: DEFAULT_LATENCY_MS,
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl DirectoryConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exports"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.directory.latency(), Duration::from_millis(300));
        assert_eq!(config.directory.default_per_page, 10);
        assert!(config.directory.fixture_path.is_none());
        assert_eq!(config.export.output_dir, PathBuf::from("exports"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[directory]\nlatency_ms = 0\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.directory.latency(), Duration::ZERO);
        assert_eq!(config.directory.default_per_page, 10);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.directory.fixture_path = Some(PathBuf::from("data/users.json"));
        config.logging.file = Some(PathBuf::from("directory.log"));
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[directory\nlatency_ms = ").unwrap();
        assert!(Config::load(&path).is_err());
    }
}

use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub catalog_file: PathBuf,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Simple,
    Detailed,
    Json,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                catalog_file: Self::config_dir().join("catalog.json"),
                color: true,
                format: None,
            },
        }
    }
}

impl Config {
    /// Load the config at `config_path`, writing defaults there if it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.catalog_file.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Catalog file cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("techcatalog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.general.catalog_file = PathBuf::from("/tmp/jakarta.json");
        config.general.color = false;
        config.general.format = Some(OutputFormat::Json);

        config.save_to(&path).unwrap();

        assert_eq!(Config::load_custom(&path).unwrap(), config);
    }

    #[test]
    fn test_optional_fields_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\ncatalog_file = \"catalog.json\"\n").unwrap();

        let config = Config::load_custom(&path).unwrap();

        assert_eq!(config.general.catalog_file, PathBuf::from("catalog.json"));
        assert!(config.general.color);
        assert!(config.general.format.is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[general]\ncatalog_file = \"\"\n").unwrap();
        assert!(matches!(Config::load_custom(&path), Err(AppError::Config(_))));

        std::fs::write(&path, "[general]\ncatalog_file = \"c.json\"\nformat = \"table\"\n").unwrap();
        assert!(matches!(Config::load_custom(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn test_save_into_file_parent_keeps_io_source() {
        use std::error::Error as _;

        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = Config::default()
            .save_to(&blocker.join("config.toml"))
            .unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert!(err.source().is_some_and(|s| s.is::<std::io::Error>()));
    }
}

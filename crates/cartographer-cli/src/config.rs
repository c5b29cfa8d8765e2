//! Configuration management for the CLI.
//!
//! The configuration is read once at startup and then passed down as an
//! immutable value.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Archive root used when neither flag, environment nor config names one.
pub const DEFAULT_BASE_DIR: &str = "./akashic-archives-demo";

/// Environment variable naming the archive root.
pub const BASE_DIR_ENV: &str = "CARTOGRAPHER_BASE";

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Archive root directory
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Shell history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (ids only) format
    Quiet,
}

impl Config {
    /// Directory holding the config file and shell history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".cartographer"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Get the shell history file path, creating its directory.
    pub fn history_path() -> Result<PathBuf> {
        let dir = Self::dir()?;
        fs::create_dir_all(&dir)?;
        Ok(dir.join("history.txt"))
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file. A missing file is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Resolve the archive root: explicit value (flag or environment) first,
    /// then the config file, then [`DEFAULT_BASE_DIR`].
    pub fn resolve_base_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.base_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.base_dir.is_none());
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::from_toml_str(
            r#"
            base_dir = "/data/archive"

            [settings]
            color = false
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_dir, Some(PathBuf::from("/data/archive")));
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.base_dir.is_none());
        assert!(config.settings.color);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Config::from_toml_str("[settings]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_base_dir_precedence() {
        let config = Config {
            base_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };

        assert_eq!(
            config.resolve_base_dir(Some(PathBuf::from("/from/flag"))),
            PathBuf::from("/from/flag")
        );
        assert_eq!(config.resolve_base_dir(None), PathBuf::from("/from/config"));
        assert_eq!(
            Config::default().resolve_base_dir(None),
            PathBuf::from(DEFAULT_BASE_DIR)
        );
    }

    #[test]
    fn test_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "base_dir = \"archive\"\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_dir, Some(PathBuf::from("archive")));
    }

    #[test]
    fn test_from_missing_file_is_error() {
        let result = Config::from_file("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

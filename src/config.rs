//! Configuration for examsense.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the dataset build.
///
/// The corpus root and report path are fixed per study; the CLI can
/// override them for a single invocation without touching the saved
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding one folder per subject
    pub corpus_root: PathBuf,

    /// Path to the semi-structured grade report
    pub grade_report: PathBuf,

    /// Path of the exported JSON dataset
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_root: PathBuf::from("Data"),
            grade_report: PathBuf::from("StudentGrades.txt"),
            output_path: PathBuf::from("processed_data.json"),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("examsense")
            .join("config.json")
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.corpus_root, PathBuf::from("Data"));
        assert_eq!(config.grade_report, PathBuf::from("StudentGrades.txt"));
        assert_eq!(config.output_path, PathBuf::from("processed_data.json"));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config {
            corpus_root: PathBuf::from("/study/data"),
            grade_report: PathBuf::from("/study/grades.txt"),
            output_path: PathBuf::from("/study/out.json"),
        };

        let json = serde_json::to_string(&config).expect("serialize");
        let restored: Config = serde_json::from_str(&json).expect("parse");
        assert_eq!(restored.corpus_root, config.corpus_root);
        assert_eq!(restored.grade_report, config.grade_report);
        assert_eq!(restored.output_path, config.output_path);
    }
}

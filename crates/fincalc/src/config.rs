//! Saved calculator defaults
//!
//! `{data_dir}/config.yaml` holds one section per calculator. Any field left
//! out falls back to the built-in default, so a file with just
//!
//! ```yaml
//! backtest:
//!   asset_id: nasdaq
//! ```
//!
//! is valid.

use std::fs;
use std::path::{Path, PathBuf};

use fincalc_core::model::{BacktestInput, BudgetInput, CompoundInput, ExpectancyInput, GoalInput};
use serde::{Deserialize, Serialize};

/// Config file name inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Error types for config file operations
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Starting inputs for every calculator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub compound: CompoundInput,
    pub goal: GoalInput,
    pub backtest: BacktestInput,
    pub expectancy: ExpectancyInput,
    pub review: BudgetInput,
}

impl CalculatorConfig {
    /// Get the default data directory path (~/.fincalc/)
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fincalc")
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Load from `path`; a missing file gives the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_yaml(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {e}")))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Io(format!("Failed to create config directory: {e}")))?;
        }

        let yaml = self
            .to_yaml()
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {e}")))?;

        fs::write(path, yaml).map_err(|e| ConfigError::Io(format!("Failed to write config: {e}")))
    }
}

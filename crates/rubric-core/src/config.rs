//! User configuration for rubric
//!
//! Stored in `~/.config/rubric/config.toml` (or `$RUBRIC_CONFIG_DIR/config.toml`).
//! Every key is optional; command-line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::DEFAULT_SCALE_MAX;
use crate::error::{RubricError, Result};
use crate::missing::MissingPolicy;

const CONFIG_DIR: &str = "rubric";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "RUBRIC_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricConfig {
    /// Preferred language code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Rubric file used instead of the built-in rubric
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<PathBuf>,

    /// What to do with scores the schema cannot describe
    #[serde(default)]
    pub missing: MissingPolicy,

    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Pad body rows with empty cells so they line up with the header
    #[serde(default = "default_pad_rows")]
    pub pad_rows: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            pad_rows: default_pad_rows(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Upper bound of the radar scale
    #[serde(default = "default_scale_max")]
    pub scale_max: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            scale_max: default_scale_max(),
        }
    }
}

fn default_pad_rows() -> bool {
    true
}

fn default_scale_max() -> u32 {
    DEFAULT_SCALE_MAX
}

impl RubricConfig {
    /// Location of the user configuration file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RubricError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user configuration, or defaults when there is none
    pub fn load_default() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RubricError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: RubricConfig = toml::from_str(&content)?;
        if config.chart.scale_max == 0 {
            crate::bail_invalid!("chart.scale_max", config.chart.scale_max);
        }
        debug!(path = %path.display(), "load_config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| RubricError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

//! CLI configuration — persisted as JSON.

use std::path::{Path, PathBuf};

use model_name_parser::ModelField;
use serde::{Deserialize, Serialize};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fields joined for the `Long:` line.
    #[serde(default = "default_long_keys")]
    pub long_keys: Vec<ModelField>,
    /// Fields joined for the `Short:` line.
    #[serde(default = "default_short_keys")]
    pub short_keys: Vec<ModelField>,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_long_keys() -> Vec<ModelField> {
    ModelField::LONG.to_vec()
}
fn default_short_keys() -> Vec<ModelField> {
    ModelField::SHORT.to_vec()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            long_keys: default_long_keys(),
            short_keys: default_short_keys(),
            output: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Platform config directory: `~/.config/model-names/`
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("model-names")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Load from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

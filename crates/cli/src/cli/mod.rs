pub mod config_cmd;
pub mod demo;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use model_name_parser::ModelField;

use crate::config::{AppConfig, OutputFormat};

#[derive(Parser)]
#[command(
    name = "model-names",
    version,
    about = "Parse and pretty-print model distribution file names"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, clap::Args, Clone)]
pub struct GlobalArgs {
    /// Output format (overrides config).
    #[arg(long, value_enum, env = "MODEL_NAMES_OUTPUT")]
    pub output: Option<OutputFormat>,

    /// Configuration file (default: platform config dir).
    #[arg(long, env = "MODEL_NAMES_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::config_file)
    }

    /// Load the configuration file and apply command-line overrides.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut cfg = AppConfig::load_from(&self.config_path())?;
        if let Some(output) = self.output {
            cfg.output = output;
        }
        Ok(cfg)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one or more file names.
    Parse(ParseArgs),

    /// Parse a built-in catalogue of real model file names (default).
    Demo,

    /// View / edit configuration.
    Config(ConfigArgs),
}

//  Subcommand argument structs

#[derive(Debug, clap::Args, Clone)]
pub struct ParseArgs {
    /// File names to parse, e.g. `qwen2-7b-instruct-q4_k_m.gguf`.
    #[arg(required = true)]
    pub file_names: Vec<String>,

    /// Comma-separated fields to print instead of the long/short lines.
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<ModelField>,
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Display the current configuration.
    Show,
    /// Set a configuration value.
    Set { key: String, value: String },
}

use model_name_parser::ModelField;

use crate::cli::{ConfigArgs, GlobalArgs};
use crate::config::{AppConfig, OutputFormat};

pub fn execute(global: &GlobalArgs, args: ConfigArgs) -> anyhow::Result<()> {
    let path = global.config_path();
    match args.action {
        crate::cli::ConfigAction::Show => {
            let cfg = AppConfig::load_from(&path)?;
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        crate::cli::ConfigAction::Set { key, value } => {
            let mut cfg = AppConfig::load_from(&path)?;
            apply(&mut cfg, &key, &value)?;
            cfg.save_to(&path)?;
            tracing::info!(path = %path.display(), key, "configuration updated");
            println!("Configuration updated.");
        }
    }
    Ok(())
}

fn apply(cfg: &mut AppConfig, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "long_keys" => cfg.long_keys = parse_field_list(value)?,
        "short_keys" => cfg.short_keys = parse_field_list(value)?,
        "output" => {
            cfg.output = <OutputFormat as clap::ValueEnum>::from_str(value, true)
                .map_err(|e| anyhow::anyhow!("{e}"))?
        }
        _ => anyhow::bail!("Unknown config key: {key}"),
    }
    Ok(())
}

/// `name, parameters,context` -> fields. Empty items are skipped.
fn parse_field_list(value: &str) -> anyhow::Result<Vec<ModelField>> {
    Ok(value
        .split(',')
        .filter(|item| !item.trim().is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()?)
}

use std::io::{self, Write};

use model_name_parser::{ModelField, ParsedModelName, format_fields, parse_model_name};
use serde::Serialize;
use tracing::info;

use crate::cli::{GlobalArgs, ParseArgs};
use crate::config::{AppConfig, OutputFormat};

/// One parsed file name as printed by `parse` and `demo`.
#[derive(Debug, Serialize)]
pub struct Rendered<'a> {
    pub file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    pub long: String,
    pub short: String,
    pub result: ParsedModelName,
}

pub fn execute(global: &GlobalArgs, args: ParseArgs) -> anyhow::Result<()> {
    let cfg = global.load_config()?;
    let names: Vec<&str> = args.file_names.iter().map(String::as_str).collect();
    render(&mut io::stdout().lock(), &cfg, &names, &args.keys)
}

/// Parse every name and write it out in the configured format.
/// A non-empty `keys` adds a `Formatted:` line built from those fields.
pub fn render(
    out: &mut impl Write,
    cfg: &AppConfig,
    file_names: &[&str],
    keys: &[ModelField],
) -> anyhow::Result<()> {
    let rendered: Vec<Rendered<'_>> = file_names
        .iter()
        .map(|&file| {
            let result = parse_model_name(file);
            Rendered {
                file,
                formatted: (!keys.is_empty()).then(|| format_fields(&result, keys)),
                long: format_fields(&result, &cfg.long_keys),
                short: format_fields(&result, &cfg.short_keys),
                result,
            }
        })
        .collect();

    info!(count = rendered.len(), output = ?cfg.output, "parsed file names");

    match cfg.output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rendered)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for entry in &rendered {
                writeln!(out, "File: {}", entry.file)?;
                match &entry.formatted {
                    Some(formatted) => writeln!(out, "Formatted: {formatted}")?,
                    None => {
                        writeln!(out, "Long: {}", entry.long)?;
                        writeln!(out, "Short: {}", entry.short)?;
                    }
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

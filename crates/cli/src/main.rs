mod cli;
mod config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    //  Logging (stderr, so stdout only carries results)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,model_names=info")),
        )
        .init();

    let args = cli::Cli::parse();

    match args.command {
        Some(cli::Commands::Parse(parse_args)) => cli::parse::execute(&args.global, parse_args),
        Some(cli::Commands::Config(c)) => cli::config_cmd::execute(&args.global, c),
        // Default: show the demo catalogue
        Some(cli::Commands::Demo) | None => cli::demo::execute(&args.global),
    }
}

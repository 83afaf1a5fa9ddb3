//! Vasari CLI - Normalize the design knowledge base into intelligence bundles.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vasari_cli::commands;
use vasari_cli::{Cli, Command, Config, Formatter};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> vasari_cli::Result<bool> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Convert(args) => commands::execute_convert(args, &config, &formatter),
        Command::Validate(args) => commands::execute_validate(args, &config, &formatter),
        Command::Sources(args) => commands::execute_sources(args, &config, &formatter),
    }
}

use anyhow::{Context, Result};
use clap::Parser;

use techcatalog::cli::Cli;
use techcatalog::config::Config;
use techcatalog::utils::report_error;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let mut config = Config::load_custom(&config_path)
        .with_context(|| format!("Failed to load config file: {}", config_path.display()))?;

    if let Some(file) = cli.file {
        config.general.catalog_file = file;
    }
    if !config.general.color {
        colored::control::set_override(false);
    }
    log::debug!("Using catalog file {}", config.general.catalog_file.display());

    // Command failures are reported here; returning them would print twice
    if let Err(e) = cli.command.execute(config, &config_path) {
        report_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

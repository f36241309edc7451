use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::AppResult;
use crate::utils::print_success;
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config, config_path),
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> AppResult<()> {
    println!("⚙️  Techcatalog Configuration");
    println!("===========================");
    println!("File: {}", config_path.display());

    println!("General:");
    println!("  Catalog file: {}", config.general.catalog_file.display());
    println!("  Color: {}", config.general.color);
    if let Some(format) = &config.general.format {
        println!("  Default format: {:?}", format);
    }

    Ok(())
}

fn handle_config_help(config_path: &Path) -> AppResult<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  techcatalog config show    - Show current configuration");
    println!("  techcatalog config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> AppResult<()> {
    Config::default().save_to(config_path)?;
    print_success(&format!(
        "Configuration reset to defaults: {}",
        config_path.display()
    ));
    Ok(())
}

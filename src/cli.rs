use crate::commands::{configure, format, show, update};
use crate::config::{Config, OutputFormat};
use crate::utils::error::AppResult;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "techcatalog")]
#[command(about = "View and update a technology catalog stored as JSON")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE", help = "Catalog file to use (overrides config)")]
    pub file: Option<PathBuf>,

    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config, config_path: &Path) -> AppResult<()> {
        match self {
            Commands::Show(args) => show::handle_show_command(&config, &args),
            Commands::Update(args) => update::handle_update_command(&config, &args),
            Commands::Format(args) => format::handle_format_command(&config, &args),
            Commands::Config(args) => configure::handle_config_command(config, config_path, args.command),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the catalog or a single technology
    Show(ShowArgs),

    /// Replace the description of a technology
    Update(UpdateArgs),

    /// Rewrite the catalog file in canonical form
    Format(FormatArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(short, long, help = "Technology name (case-insensitive)")]
    pub name: Option<String>,

    #[arg(long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(help = "Technology name (case-insensitive)")]
    pub name: String,

    #[arg(help = "New description")]
    pub description: String,
}

#[derive(Args)]
pub struct FormatArgs {
    #[arg(long, help = "Only report whether the file is already canonical")]
    pub check: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_command() {
        let cli = Cli::try_parse_from([
            "techcatalog",
            "--file",
            "jakarta.json",
            "update",
            "Servlet",
            "New servlet description",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("jakarta.json")));
        assert!(!cli.debug);
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.name, "Servlet");
                assert_eq!(args.description, "New servlet description");
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn test_parse_show_command() {
        let cli = Cli::try_parse_from([
            "techcatalog",
            "-d",
            "show",
            "--name",
            "persistence",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.name.as_deref(), Some("persistence"));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_description() {
        assert!(Cli::try_parse_from(["techcatalog", "update", "Servlet"]).is_err());
    }

    #[test]
    fn test_parse_config_and_format() {
        let cli = Cli::try_parse_from(["techcatalog", "format", "--check"]).unwrap();
        assert!(matches!(cli.command, Commands::Format(FormatArgs { check: true })));

        let cli = Cli::try_parse_from(["techcatalog", "config", "reset"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigArgs { command: Some(ConfigCommands::Reset) })
        ));
    }
}

use crate::config::OutputFormat;
use crate::core::data::{Catalog, Technology};
use crate::core::error::{CatalogError, CatalogResult, StorageAction};
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    pub fn print_technology_detailed(technology: &Technology) {
        println!("{}", Self::title("🔧 Technology Details"));
        Self::print_field_colored("Name", &technology.name, Self::name);
        println!("\n{}:", Self::title("📄 Description"));
        println!("{}", Self::content(&technology.description));
    }

    /// One line per technology: `name: description` with the description cut short
    pub fn format_technology_line(technology: &Technology) -> String {
        format!(
            "{}: {}",
            Self::name(&technology.name),
            Self::content(&truncate_string(&technology.description, 80))
        )
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with "..."
pub fn truncate_string(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= max_chars && first_line.len() == text.len() {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let truncated: String = first_line.chars().take(keep).collect();
    format!("{}...", truncated)
}

/// Display formatter for the supported output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn print_catalog(catalog: &Catalog, format: OutputFormat) -> CatalogResult<()> {
        match format {
            OutputFormat::Simple => Self::print_simple(catalog),
            OutputFormat::Detailed => Self::print_detailed(catalog),
            OutputFormat::Json => println!("{}", catalog.to_json_pretty()?),
        }
        Ok(())
    }

    pub fn print_technology(technology: &Technology, format: OutputFormat) -> CatalogResult<()> {
        match format {
            OutputFormat::Simple => println!("{}", OutputStyle::format_technology_line(technology)),
            OutputFormat::Detailed => OutputStyle::print_technology_detailed(technology),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(technology)
                    .map_err(|e| CatalogError::storage(StorageAction::Write, "<stdout>", e))?;
                println!("{}", json);
            }
        }
        Ok(())
    }

    fn print_simple(catalog: &Catalog) {
        println!(
            "📚 {} {} ({} technologies)",
            OutputStyle::header("Version"),
            OutputStyle::info(&catalog.version),
            catalog.technologies.len()
        );
        println!("{}", OutputStyle::separator());
        if catalog.technologies.is_empty() {
            println!("{}", OutputStyle::muted("No technologies found."));
        }
        for technology in &catalog.technologies {
            println!("{}", OutputStyle::format_technology_line(technology));
        }
    }

    fn print_detailed(catalog: &Catalog) {
        OutputStyle::print_header("📚 Technology Catalog");
        OutputStyle::print_field_colored("Version", &catalog.version, OutputStyle::info);
        OutputStyle::print_field_colored("Description", &catalog.description, OutputStyle::content);

        for (i, technology) in catalog.technologies.iter().enumerate() {
            println!("\n{}. {}", i + 1, OutputStyle::name(&technology.name));
            println!("   {}", OutputStyle::content(&technology.description));

            if i < catalog.technologies.len() - 1 {
                println!("{}", OutputStyle::separator());
            }
        }
    }
}

use crate::cli::FormatArgs;
use crate::config::Config;
use crate::core::operations::JsonFileStore;
use crate::core::traits::CatalogStore;
use crate::utils::error::{AppError, AppResult, FlowResult, handle_flow};

pub fn handle_format_command(config: &Config, args: &FormatArgs) -> AppResult<()> {
    let store = JsonFileStore::from_config(config);
    let catalog = store.load_catalog()?;
    let path = &config.general.catalog_file;

    let current = std::fs::read_to_string(path)?;
    if current == catalog.to_json_pretty()? {
        handle_flow(FlowResult::Unchanged(format!(
            "{} is already canonical",
            path.display()
        )));
        return Ok(());
    }

    if args.check {
        return Err(AppError::CheckFailed(format!(
            "{} is not in canonical form",
            path.display()
        )));
    }

    store.save_catalog(&catalog)?;
    handle_flow(FlowResult::Success(format!("Reformatted {}", path.display())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use crate::core::data::{Catalog, Technology};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const COMPACT: &str =
        r#"{"version":"10","description":"Jakarta EE","technologies":[{"name":"Servlet","description":"HTTP"}]}"#;

    fn config_for(path: &Path) -> Config {
        Config {
            general: GeneralConfig {
                catalog_file: path.to_path_buf(),
                color: false,
                format: None,
            },
        }
    }

    fn expected_catalog() -> Catalog {
        Catalog::new("10", "Jakarta EE", vec![Technology::new("Servlet", "HTTP")])
    }

    #[test]
    fn test_check_on_compact_file_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, COMPACT).unwrap();

        let result = handle_format_command(&config_for(&path), &FormatArgs { check: true });

        assert!(matches!(result, Err(AppError::CheckFailed(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), COMPACT);
    }

    #[test]
    fn test_format_rewrites_compact_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, COMPACT).unwrap();

        handle_format_command(&config_for(&path), &FormatArgs { check: false }).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            expected_catalog().to_json_pretty().unwrap()
        );
    }

    #[test]
    fn test_canonical_file_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        expected_catalog().persist(&path).unwrap();
        let before = fs::read(&path).unwrap();

        handle_format_command(&config_for(&path), &FormatArgs { check: true }).unwrap();
        handle_format_command(&config_for(&path), &FormatArgs { check: false }).unwrap();

        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_format_on_corrupted_file_is_catalog_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{\"version\":").unwrap();

        let result = handle_format_command(&config_for(&path), &FormatArgs { check: false });

        assert!(matches!(result, Err(AppError::Catalog(e)) if e.is_fatal()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"version\":");
    }
}

use crate::cli::ShowArgs;
use crate::config::{Config, OutputFormat};
use crate::core::operations::JsonFileStore;
use crate::core::traits::CatalogStore;
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use crate::utils::DisplayFormatter;

pub fn handle_show_command(config: &Config, args: &ShowArgs) -> AppResult<()> {
    let store = JsonFileStore::from_config(config);
    let catalog = store.load_catalog()?;
    let format = args
        .format
        .or(config.general.format)
        .unwrap_or(OutputFormat::Simple);

    match &args.name {
        Some(name) => match catalog.find_technology(name) {
            Some(technology) => DisplayFormatter::print_technology(technology, format)?,
            None => handle_flow(FlowResult::NotFound {
                item_type: "Technology".to_string(),
                search_term: name.clone(),
            }),
        },
        None => DisplayFormatter::print_catalog(&catalog, format)?,
    }

    Ok(())
}

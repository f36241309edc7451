use crate::cli::UpdateArgs;
use crate::config::Config;
use crate::core::data::Technology;
use crate::core::operations::JsonFileStore;
use crate::core::traits::CatalogStore;
use crate::utils::error::{AppResult, FlowResult, handle_flow};

pub fn handle_update_command(config: &Config, args: &UpdateArgs) -> AppResult<()> {
    let store = JsonFileStore::from_config(config);
    let candidate = Technology::new(args.name.clone(), args.description.clone());

    if store.update_technology(Some(&candidate))? {
        handle_flow(FlowResult::Success(format!(
            "Technology '{}' updated",
            args.name
        )));
    } else {
        handle_flow(FlowResult::NotFound {
            item_type: "Technology".to_string(),
            search_term: args.name.clone(),
        });
    }

    Ok(())
}

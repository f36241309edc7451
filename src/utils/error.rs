use crate::core::error::CatalogError;
use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Check failed: {0}")]
    CheckFailed(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub enum FlowResult {
    NotFound {
        item_type: String,
        search_term: String,
    },
    Unchanged(String),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::Catalog(CatalogError::InvalidArgument(msg)) => {
            eprintln!("⚠️  {}", OutputStyle::warning(msg));
        }
        AppError::Catalog(e) => {
            eprintln!("❌ {}", OutputStyle::error(&e.to_string()));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(msg));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(&e.to_string()));
        }
        AppError::CheckFailed(msg) => {
            eprintln!("✗ {}", OutputStyle::warning(msg));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::NotFound {
            item_type,
            search_term,
        } => {
            let msg = format!("{} '{}' not found", item_type, search_term);
            println!("⚠️  {}", OutputStyle::warning(&msg));
        }
        FlowResult::Unchanged(msg) => {
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}

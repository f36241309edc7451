pub mod error;
pub mod output;

pub use error::{AppError, AppResult, FlowResult, handle_flow, report_error};
pub use output::{DisplayFormatter, OutputStyle, print_success};

//! Command-line interface for `deploy-wiki`

pub mod deploy;
pub mod output;
pub mod types;

pub use deploy::{execute, load_config, run};
pub use output::{output, report_error, CommandOutput};
pub use types::Cli;

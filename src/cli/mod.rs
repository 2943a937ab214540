/// CLI layer: argument parsing, errors and output formatting.
pub mod args;
pub mod errors;
pub mod output;

pub use args::Cli;
pub use errors::CliError;
pub use output::{OutputCtx, write_error};

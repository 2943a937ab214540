/// Command dispatch.
pub mod fetch;

use crate::cli::{Cli, CliError, OutputCtx};

/// Run the command described by the parsed arguments.
///
/// # Errors
///
/// Returns `CliError` on a missing URL, a failed fetch, or an output failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), CliError> {
    fetch::run(cli, ctx)
}

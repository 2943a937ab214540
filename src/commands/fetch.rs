/// The fetch command: look up one video and print its result record.
use tracing::info;

use crate::cli::output::write_outcome;
use crate::cli::{Cli, CliError, OutputCtx};
use crate::config::Settings;
use crate::fetch::{fetch_video_info, fetcher_for};
use crate::video_url;

/// Run `douyin-fetch <video_url>`.
///
/// # Errors
///
/// Returns `CliError::MissingArgument` when no URL is given, and
/// `CliError::FetchFailed` after printing a record that carries `error`.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), CliError> {
    let raw = cli
        .url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .ok_or(CliError::MissingArgument)?;

    let settings = Settings::from_args(cli);
    let url = video_url::normalize(raw);
    let fetcher = fetcher_for(&settings);
    info!(backend = fetcher.name(), %url, "looking up video");

    let outcome = fetch_video_info(fetcher.as_ref(), &url);
    write_outcome(&outcome, ctx)?;

    if outcome.has_error() {
        return Err(CliError::FetchFailed);
    }
    Ok(())
}

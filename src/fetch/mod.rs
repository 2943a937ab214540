/// Fetch layer: the `VideoInfoFetcher` capability and its backends.
pub mod errors;
pub mod http_api;
pub mod unconfigured;

pub use errors::FetchError;
pub use http_api::HttpApiFetcher;
pub use unconfigured::UnconfiguredFetcher;

use tracing::debug;

use crate::config::{Backend, Settings};
use crate::types::{FailureRecord, FetchOutcome, VideoInfo};

/// Something that can look up metadata for a video URL.
pub trait VideoInfoFetcher {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch metadata for `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the backend cannot produce metadata.
    fn fetch_info(&self, url: &str) -> Result<VideoInfo, FetchError>;
}

/// Build the backend selected by `settings`.
#[must_use]
pub fn fetcher_for(settings: &Settings) -> Box<dyn VideoInfoFetcher> {
    match settings.backend {
        Backend::Unconfigured => Box::new(UnconfiguredFetcher),
        Backend::Http => Box::new(HttpApiFetcher::new(
            &settings.api_base_url,
            settings.timeout,
        )),
    }
}

/// Run `fetcher` and fold any error into a result record.
#[must_use]
pub fn fetch_video_info(fetcher: &dyn VideoInfoFetcher, url: &str) -> FetchOutcome {
    debug!(backend = fetcher.name(), url, "fetching video info");
    match fetcher.fetch_info(url) {
        Ok(info) => FetchOutcome::Info(info),
        Err(err) => {
            debug!(backend = fetcher.name(), error = %err, "fetch failed");
            FetchOutcome::Failure(FailureRecord::from_fetch_error(&err))
        }
    }
}

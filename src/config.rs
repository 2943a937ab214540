/// Backend selection and runtime settings.
///
/// Precedence is flag, then environment variable (both handled by clap),
/// then the defaults below.
use std::time::Duration;

use tracing::{debug, warn};

use crate::cli::args::{BackendChoice, Cli};

/// Base URL used when the HTTP backend is forced without one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Path of the extraction endpoint on the API service.
pub const API_ENDPOINT_PATH: &str = "/api/douyin/web";
/// Request timeout for the HTTP backend.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A concrete fetch backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// The placeholder that always reports "not configured".
    #[default]
    Unconfigured,
    /// A running `Douyin_TikTok_Download_API` HTTP service.
    Http,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend: Backend,
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Resolve settings from parsed CLI arguments.
    #[must_use]
    pub fn from_args(cli: &Cli) -> Self {
        Self::resolve(
            cli.backend,
            cli.api_base_url.as_deref(),
            parse_timeout(cli.timeout.as_deref()),
        )
    }

    /// Resolve the backend choice against the configured base URL.
    ///
    /// `Auto` picks HTTP only when a non-empty base URL is configured.
    #[must_use]
    pub fn resolve(choice: BackendChoice, api_base_url: Option<&str>, timeout_secs: u64) -> Self {
        let configured_url = api_base_url.map(str::trim).filter(|u| !u.is_empty());

        let backend = match choice {
            BackendChoice::Unconfigured => Backend::Unconfigured,
            BackendChoice::Http => Backend::Http,
            BackendChoice::Auto if configured_url.is_some() => Backend::Http,
            BackendChoice::Auto => Backend::Unconfigured,
        };

        let settings = Self {
            backend,
            api_base_url: configured_url.unwrap_or(DEFAULT_API_BASE_URL).to_owned(),
            timeout: Duration::from_secs(timeout_secs),
        };
        debug!(?settings, "resolved settings");
        settings
    }
}

/// Timeout in seconds from a flag or env value.
///
/// Missing, blank, non-numeric and zero values fall back to
/// [`DEFAULT_TIMEOUT_SECS`].
#[must_use]
pub fn parse_timeout(raw: Option<&str>) -> u64 {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return DEFAULT_TIMEOUT_SECS;
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
            warn!(value = raw, default = DEFAULT_TIMEOUT_SECS, "invalid timeout, using default");
            DEFAULT_TIMEOUT_SECS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_without_url_is_unconfigured() {
        let s = Settings::resolve(BackendChoice::Auto, None, DEFAULT_TIMEOUT_SECS);
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_auto_with_url_is_http() {
        let s = Settings::resolve(BackendChoice::Auto, Some("http://api.local:9000"), 5);
        assert_eq!(s.backend, Backend::Http);
        assert_eq!(s.api_base_url, "http://api.local:9000");
        assert_eq!(s.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_auto_ignores_blank_url() {
        let s = Settings::resolve(BackendChoice::Auto, Some("  "), DEFAULT_TIMEOUT_SECS);
        assert_eq!(s.backend, Backend::Unconfigured);
        assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_forced_http_uses_default_url() {
        let s = Settings::resolve(BackendChoice::Http, None, DEFAULT_TIMEOUT_SECS);
        assert_eq!(s.backend, Backend::Http);
        assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_forced_unconfigured_wins_over_url() {
        let s = Settings::resolve(
            BackendChoice::Unconfigured,
            Some("http://api.local"),
            DEFAULT_TIMEOUT_SECS,
        );
        assert_eq!(s.backend, Backend::Unconfigured);
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(Some("5")), 5);
        assert_eq!(parse_timeout(Some(" 12 ")), 12);
        assert_eq!(parse_timeout(None), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("abc")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("-3")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_TIMEOUT_SECS);
    }
}

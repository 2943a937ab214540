/// CLI argument definitions via clap derive.
use clap::{ArgAction, Parser, ValueEnum};

/// Usage line reported when the video URL is missing.
pub const USAGE: &str = "douyin-fetch <video_url>";

/// douyin-fetch — print Douyin video metadata as one line of JSON.
#[derive(Debug, Parser)]
#[command(
    name = "douyin-fetch",
    about = "Fetch Douyin video metadata (title, duration, video/audio URLs) as JSON",
    version
)]
pub struct Cli {
    /// Douyin video URL, share text containing one, or a bare video id.
    ///
    /// Optional at the parser level so a missing URL is reported as a JSON record.
    #[arg(value_name = "VIDEO_URL", allow_hyphen_values = true)]
    pub url: Option<String>,

    /// Which fetch backend to use.
    #[arg(
        long,
        env = "DOUYIN_FETCH_BACKEND",
        value_name = "BACKEND",
        default_value = "auto"
    )]
    pub backend: BackendChoice,

    /// Base URL of a running Douyin API service (e.g. <http://localhost:8000>).
    #[arg(long, env = "DOUYIN_API_BASE_URL", value_name = "URL")]
    pub api_base_url: Option<String>,

    /// HTTP request timeout in seconds [default: 30].
    ///
    /// Kept as text so a malformed value falls back to the default instead of
    /// failing argument parsing.
    #[arg(long, env = "DOUYIN_API_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<String>,

    /// Pretty-print the JSON record instead of a single line.
    #[arg(long)]
    pub pretty: bool,

    /// Log to stderr (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum BackendChoice {
    /// HTTP when an API base URL is configured, otherwise unconfigured.
    #[default]
    Auto,
    /// Always report "not configured".
    Unconfigured,
    /// Always call the HTTP API service.
    Http,
}

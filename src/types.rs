/// Serializable result records written to stdout / stderr.
///
/// A fetch produces exactly one [`FetchOutcome`]: either the video metadata
/// or a failure record. The field order of each struct is the key order of
/// the emitted JSON object.
use serde::{Deserialize, Serialize};

use crate::fetch::FetchError;

/// Message attached to every failure other than the unconfigured stub.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch video information";

/// Error text reported when no backend is configured.
pub const NOT_CONFIGURED_ERROR: &str = "Douyin_TikTok_Download_API not configured";

/// Message reported when no backend is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Please configure the script to use Douyin_TikTok_Download_API";

/// Setup steps reported when no backend is configured.
pub const NOT_CONFIGURED_INSTRUCTIONS: [&str; 4] = [
    "1. Clone the repository: git clone https://github.com/Evil0ctal/Douyin_TikTok_Download_API",
    "2. Install dependencies: pip install -r requirements.txt",
    "3. Modify this script to import and use the crawler modules",
    "4. Or set DOUYIN_API_BASE_URL to use the HTTP API service",
];

/// Metadata for a single video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Video title (caption).
    pub title: String,
    /// Duration in seconds.
    pub duration: f64,
    /// Direct URL of the video stream.
    pub video_url: String,
    /// Direct URL of the background audio track.
    pub audio_url: String,
}

/// The error shape of a result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Short error text.
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
    /// Ordered setup steps, only present for the unconfigured backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
}

impl FailureRecord {
    /// Build the record reported for a failed fetch.
    ///
    /// `NotConfigured` keeps its fixed wording and setup steps; every other
    /// error is reported by its display text.
    #[must_use]
    pub fn from_fetch_error(err: &FetchError) -> Self {
        match err {
            FetchError::NotConfigured => Self {
                error: NOT_CONFIGURED_ERROR.to_owned(),
                message: NOT_CONFIGURED_MESSAGE.to_owned(),
                instructions: Some(
                    NOT_CONFIGURED_INSTRUCTIONS
                        .iter()
                        .map(|s| (*s).to_owned())
                        .collect(),
                ),
            },
            other => Self {
                error: other.to_string(),
                message: FETCH_FAILED_MESSAGE.to_owned(),
                instructions: None,
            },
        }
    }
}

/// A result record: either video metadata or a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FetchOutcome {
    Info(VideoInfo),
    Failure(FailureRecord),
}

impl FetchOutcome {
    /// Whether the serialized record carries an `error` key.
    #[must_use]
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Written to stderr when the video URL argument is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageErrorOutput {
    pub error: String,
    pub usage: String,
}

/// Errors surfaced by the command entry point.
use thiserror::Error;

/// Everything that makes the process exit non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    /// No video URL argument was supplied.
    #[error("Missing video URL")]
    MissingArgument,

    /// The fetch produced an error record. The record itself is already on stdout.
    #[error("Failed to fetch video information")]
    FetchFailed,

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The result record could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument | Self::FetchFailed | Self::Io(_) | Self::Serialize(_) => 1,
        }
    }

    /// Whether the error was already reported on stdout.
    #[must_use]
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }
}

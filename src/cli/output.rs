/// Output formatting: result records on stdout, usage errors on stderr.
use std::io::Write;

use serde::Serialize;

use super::args::USAGE;
use super::errors::CliError;
use crate::types::{FetchOutcome, UsageErrorOutput};

/// Output context passed to the command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// Pretty-print instead of one compact line.
    pub pretty: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

/// Write a result record to stdout.
///
/// # Errors
///
/// Returns `CliError` if serialization or the write fails.
pub fn write_outcome(outcome: &FetchOutcome, ctx: &OutputCtx) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, outcome, ctx.pretty)
}

/// Serialize `value` as JSON followed by a newline.
///
/// Non-ASCII characters are written literally.
///
/// # Errors
///
/// Returns `CliError` if serialization or the write fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> Result<(), CliError> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{s}")?;
    out.flush()?;
    Ok(())
}

/// Write a structured error to stderr.
///
/// Errors already reported on stdout are skipped.
pub fn write_error(err: &CliError) {
    if err.already_reported() {
        return;
    }
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let result = match err {
        CliError::MissingArgument => write_json(
            &mut out,
            &UsageErrorOutput {
                error: err.to_string(),
                usage: USAGE.to_owned(),
            },
            false,
        ),
        _ => write_json(&mut out, &serde_json::json!({ "error": err.to_string() }), false),
    };
    if result.is_err() {
        let _ = writeln!(out, "Error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VideoInfo;

    #[test]
    fn test_single_line_keeps_non_ascii() {
        let outcome = FetchOutcome::Info(VideoInfo {
            title: "抖音 🎬 测试".to_owned(),
            duration: 0.0,
            video_url: String::new(),
            audio_url: String::new(),
        });
        let mut buf = Vec::new();
        write_json(&mut buf, &outcome, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("抖音 🎬 测试"));
        assert!(!text.contains("\\u"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_pretty_is_multi_line() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({ "a": 1, "b": 2 }), true).unwrap();
        assert!(String::from_utf8(buf).unwrap().lines().count() > 1);
    }
}

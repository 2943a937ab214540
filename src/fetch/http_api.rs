/// Backend that asks a running `Douyin_TikTok_Download_API` service.
use std::time::Duration;

use serde_json::{Value, json};
use tracing::{debug, info};

use super::{FetchError, VideoInfoFetcher};
use crate::config::API_ENDPOINT_PATH;
use crate::types::VideoInfo;

/// Upper bound on how much of an error response body is reported.
const ERROR_BODY_LIMIT: usize = 200;

/// POSTs the video URL to `{base}/api/douyin/web` and reads the metadata
/// out of the JSON reply.
pub struct HttpApiFetcher {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpApiFetcher {
    /// Create a fetcher for the service at `base_url`. A trailing `/` is ignored.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            agent,
        }
    }

    /// Full URL of the extraction endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{API_ENDPOINT_PATH}", self.base_url)
    }
}

impl VideoInfoFetcher for HttpApiFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_info(&self, url: &str) -> Result<VideoInfo, FetchError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(FetchError::InvalidBaseUrl {
                url: self.base_url.clone(),
            });
        }

        let endpoint = self.endpoint();
        info!(%endpoint, "calling Douyin API");

        let response = self
            .agent
            .post(&endpoint)
            .set("Content-Type", "application/json")
            .send_json(json!({ "url": url }));

        match response {
            Ok(resp) => {
                debug!(status = resp.status(), "API responded");
                let body: Value = resp
                    .into_json()
                    .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;
                parse_api_response(&body)
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(FetchError::Status {
                    status,
                    body: body.chars().take(ERROR_BODY_LIMIT).collect(),
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(FetchError::Transport(transport.to_string()))
            }
        }
    }
}

/// Extract a [`VideoInfo`] from the service's reply.
///
/// Fields are looked up under `data` first, then at the top level.
///
/// # Errors
///
/// Returns `FetchError::InvalidResponse` if `body` is not a JSON object.
pub fn parse_api_response(body: &Value) -> Result<VideoInfo, FetchError> {
    if !body.is_object() {
        return Err(FetchError::InvalidResponse(
            "expected a JSON object".to_owned(),
        ));
    }

    Ok(VideoInfo {
        title: lookup_str(body, "title"),
        duration: lookup(body, "duration").map_or(0.0, parse_duration),
        video_url: lookup_str(body, "video_url"),
        audio_url: lookup_str(body, "audio_url"),
    })
}

/// `data.<key>` if it carries a value, else top-level `<key>`.
fn lookup<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get("data")
        .and_then(|data| data.get(key))
        .filter(|v| is_present(v))
        .or_else(|| body.get(key).filter(|v| is_present(v)))
}

/// Null, `""`, `0` and `false` count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lookup_str(body: &Value, key: &str) -> String {
    lookup(body, key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Seconds from a JSON number or numeric string; anything else is 0.
///
/// Non-finite values (`"inf"`, `"NaN"`, `"1e400"`) also become 0, since JSON
/// cannot carry them.
fn parse_duration(value: &Value) -> f64 {
    let seconds = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    seconds.filter(|d| d.is_finite()).unwrap_or_default()
}

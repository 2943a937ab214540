/// The placeholder backend used when no extraction service is set up.
use super::{FetchError, VideoInfoFetcher};
use crate::types::VideoInfo;

/// Always fails with [`FetchError::NotConfigured`], whatever the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredFetcher;

impl VideoInfoFetcher for UnconfiguredFetcher {
    fn name(&self) -> &'static str {
        "unconfigured"
    }

    fn fetch_info(&self, _url: &str) -> Result<VideoInfo, FetchError> {
        Err(FetchError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_not_configured() {
        for url in ["https://www.douyin.com/video/123", "", "不是网址"] {
            assert!(matches!(
                UnconfiguredFetcher.fetch_info(url),
                Err(FetchError::NotConfigured)
            ));
        }
    }
}

/// Turning user input (share text, a URL, or a bare id) into a video URL.
use std::sync::LazyLock;

use regex::Regex;

static URL_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[!-~]+").expect("static regex is valid")
});

/// Normalize the positional argument before it is handed to a backend.
///
/// - a full `http(s)://` URL is passed through untouched
/// - share text such as `"复制打开抖音 https://v.douyin.com/abc/ ..."` yields the embedded URL
/// - a bare numeric id becomes `https://www.douyin.com/video/<id>`
/// - anything else is passed through trimmed
#[must_use]
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if is_bare_url(trimmed) {
        return trimmed.to_owned();
    }
    if let Some(m) = URL_IN_TEXT.find(trimmed) {
        return m.as_str().to_owned();
    }
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return format!("https://www.douyin.com/video/{trimmed}");
    }
    trimmed.to_owned()
}

fn is_bare_url(input: &str) -> bool {
    (input.starts_with("http://") || input.starts_with("https://"))
        && !input.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_unchanged() {
        assert_eq!(
            normalize("https://www.douyin.com/video/7464082269229042971"),
            "https://www.douyin.com/video/7464082269229042971"
        );
    }

    #[test]
    fn test_extracts_url_from_share_text() {
        let share = "7.94 复制打开抖音，看看【某某的作品】 https://v.douyin.com/iRNBho6u/ Mwz:/ 04/12";
        assert_eq!(normalize(share), "https://v.douyin.com/iRNBho6u/");
    }

    #[test]
    fn test_full_url_keeps_port_fragment_and_sub_delims() {
        for url in [
            "http://example.com:8080/video/1",
            "https://www.douyin.com/video/1#comments",
            "https://www.douyin.com/search/a+b~c",
            "https://www.douyin.com/video/1?x=%E4&t=1,2",
            "https://www.douyin.com/user/self?modal_id=746408226922904297!",
        ] {
            assert_eq!(normalize(url), url);
        }
    }

    #[test]
    fn test_share_text_url_keeps_sub_delims() {
        assert_eq!(
            normalize("看看 https://www.douyin.com/search/a+b~c,d#top 复制此链接"),
            "https://www.douyin.com/search/a+b~c,d#top"
        );
    }

    #[test]
    fn test_share_text_url_stops_at_non_ascii() {
        assert_eq!(
            normalize("【作品】https://v.douyin.com/iRNBho6u/复制此链接"),
            "https://v.douyin.com/iRNBho6u/"
        );
    }

    #[test]
    fn test_bare_id_becomes_video_url() {
        assert_eq!(
            normalize(" 7464082269229042971 "),
            "https://www.douyin.com/video/7464082269229042971"
        );
    }

    #[test]
    fn test_other_input_passes_through() {
        assert_eq!(normalize("  not a url "), "not a url");
        assert_eq!(normalize(""), "");
    }
}

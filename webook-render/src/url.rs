//! Media URL handling.

use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]{11})").unwrap());
static VIMEO: Lazy<Regex> = Lazy::new(|| Regex::new(r"vimeo\.com/(\d+)").unwrap());

/// Accept http(s), inline media `data:` URLs and relative references.
///
/// Returns the trimmed URL, or `None` for empty input and any other scheme
/// (`javascript:`, `file:` and so on), which the caller renders as empty media.
pub fn sanitize_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    let scheme_end = url.find(':');
    let path_start = url.find(['/', '?', '#']);
    let has_scheme = match (scheme_end, path_start) {
        (Some(colon), Some(path)) => colon < path,
        (Some(_), None) => true,
        (None, _) => false,
    };
    if !has_scheme {
        return Some(url);
    }
    let lower = url.to_ascii_lowercase();
    let allowed = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("data:image/")
        || lower.starts_with("data:audio/")
        || lower.starts_with("data:video/");
    allowed.then_some(url)
}

/// Player URL for YouTube and Vimeo links
pub fn video_embed(url: &str) -> Option<String> {
    if let Some(caps) = YOUTUBE.captures(url) {
        return Some(format!("https://www.youtube.com/embed/{}?rel=0", &caps[1]));
    }
    VIMEO
        .captures(url)
        .map(|caps| format!("https://player.vimeo.com/video/{}", &caps[1]))
}

/// Last path segment, used to name a download
pub fn file_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(path)
}

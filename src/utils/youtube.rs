//! YouTube video ID extraction from user-supplied references.
//!
//! Profile data carries whatever the content owner pasted: short links, watch
//! links with tracking parameters, embed, shorts or live links. Everything is
//! reduced to a validated [`VideoId`] or rejected.

use url::Url;

use crate::domain::video_id::VideoId;

/// Path prefixes on youtube.com whose next segment is the video ID.
const ID_PATH_PREFIXES: &[&str] = &["/embed/", "/shorts/", "/live/"];

/// Extracts a YouTube video ID from a URL-shaped reference.
///
/// # Recognized Shapes
///
/// - `youtu.be/<id>`
/// - `youtube.com/watch?v=<id>` (any other query parameters ignored)
/// - `youtube.com/embed/<id>`, `/shorts/<id>`, `/live/<id>`
///
/// A missing scheme is treated as `https://`; `www.` is ignored. The candidate
/// is cut at the first `?`, `#` or `/` and must then be exactly 11 characters
/// of `[A-Za-z0-9_-]`.
///
/// Returns `None` for absent or empty input, unparseable URLs, unknown hosts
/// or paths, a missing `v` parameter and malformed candidates alike. A bare
/// video ID is not URL-shaped and also yields `None`.
///
/// # Examples
///
/// ```
/// use volley_fund::utils::youtube::extract_video_id;
///
/// assert_eq!(
///     extract_video_id(Some("https://youtu.be/dQw4w9WgXcQ?t=45")).unwrap().as_str(),
///     "dQw4w9WgXcQ"
/// );
/// assert!(extract_video_id(Some("https://youtu.be/ABC123")).is_none());
/// ```
pub fn extract_video_id(input: Option<&str>) -> Option<VideoId> {
    let input = input.filter(|s| !s.is_empty())?;

    let url = if has_http_scheme(input) {
        Url::parse(input)
    } else {
        Url::parse(&format!("https://{input}"))
    }
    .ok()?;

    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let path = url.path();

    let candidate = if host == "youtu.be" {
        url.path_segments()?.next()?.to_string()
    } else if path == "/watch" && is_youtube_host(host) {
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?
    } else if is_youtube_host(host) && ID_PATH_PREFIXES.iter().any(|p| path.starts_with(p)) {
        url.path_segments()?.nth(1)?.to_string()
    } else {
        return None;
    };

    VideoId::parse(sanitize(&candidate))
}

/// Cuts a candidate at the first query, fragment or path delimiter.
fn sanitize(candidate: &str) -> &str {
    candidate
        .split(['?', '#', '/'])
        .next()
        .unwrap_or_default()
}

/// Any host ending in `youtube.com`, which covers `m.` and `music.`.
fn is_youtube_host(host: &str) -> bool {
    host.ends_with("youtube.com")
}

fn has_http_scheme(input: &str) -> bool {
    let prefix = |p: &str| {
        input
            .get(..p.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(p))
    };
    prefix("http://") || prefix("https://")
}

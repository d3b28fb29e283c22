//! Vimeo id extraction, embed and thumbnail URLs

use super::{flag, with_query};
use crate::resolver::models::PlaybackPolicy;
use regex::Regex;
use std::sync::LazyLock;

/// Vimeo ids are ASCII digits only. Each pattern requires the id to end at
/// a path, query, fragment or whitespace boundary.
pub(crate) static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)vimeo\.com/([0-9]+)(?:[/?#&\s]|$)",
        r"(?i)vimeo\.com/video/([0-9]+)(?:[/?#&\s]|$)",
        r"(?i)player\.vimeo\.com/video/([0-9]+)(?:[/?#&\s]|$)",
        r"(?i)vimeo\.com/channels/[^/?#\s]+/([0-9]+)(?:[/?#&\s]|$)",
        r"(?i)vimeo\.com/groups/[^/?#\s]+/videos/([0-9]+)(?:[/?#&\s]|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid vimeo pattern"))
    .collect()
});

/// Build the player URL for `id` under `policy`.
///
/// `background=1` is only requested for the full decorative policy since it
/// hides controls and forces autoplay on Vimeo's side.
pub fn embed_url(id: &str, policy: &PlaybackPolicy) -> String {
    let mut params = vec![("autoplay", flag(policy.autoplay))];
    if policy.loop_ {
        params.push(("loop", flag(true)));
    }
    if policy.muted {
        params.push(("muted", flag(true)));
    }
    if policy.is_background() {
        params.push(("background", flag(true)));
    }
    params.push(("controls", flag(policy.controls)));

    with_query(&format!("https://player.vimeo.com/video/{}", id), &params)
}

pub fn thumbnail_url(id: &str) -> String {
    format!("https://vumbnail.com/{}.jpg", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::platforms::first_capture;

    fn extract(url: &str) -> Option<String> {
        first_capture(&PATTERNS, url)
    }

    #[test]
    fn test_extract_forms() {
        assert_eq!(extract("https://vimeo.com/76979871"), Some("76979871".to_string()));
        assert_eq!(
            extract("https://vimeo.com/76979871?share=copy"),
            Some("76979871".to_string())
        );
        assert_eq!(extract("https://vimeo.com/video/76979871"), Some("76979871".to_string()));
        assert_eq!(
            extract("https://player.vimeo.com/video/76979871?h=abc"),
            Some("76979871".to_string())
        );
        assert_eq!(
            extract("https://vimeo.com/channels/staffpicks/76979871"),
            Some("76979871".to_string())
        );
        assert_eq!(
            extract("https://vimeo.com/groups/shortfilms/videos/76979871"),
            Some("76979871".to_string())
        );
    }

    #[test]
    fn test_extract_untrimmed_input() {
        assert_eq!(
            extract("https://vimeo.com/76979871 \n"),
            Some("76979871".to_string())
        );
        assert_eq!(
            extract("  https://player.vimeo.com/video/76979871\t"),
            Some("76979871".to_string())
        );
        assert_eq!(extract("https://vimeo.com/123 abc"), Some("123".to_string()));
    }

    #[test]
    fn test_extract_rejects_non_numeric() {
        assert_eq!(extract("https://vimeo.com/staffpicks"), None);
        assert_eq!(extract("https://vimeo.com/123abc"), None);
        assert_eq!(extract("https://vimeo.com/"), None);
    }

    #[test]
    fn test_background_embed_shape() {
        assert_eq!(
            embed_url("76979871", &PlaybackPolicy::BACKGROUND),
            "https://player.vimeo.com/video/76979871?autoplay=1&loop=1&muted=1&background=1&controls=0"
        );
    }

    #[test]
    fn test_interactive_embed_shape() {
        assert_eq!(
            embed_url("76979871", &PlaybackPolicy::INTERACTIVE),
            "https://player.vimeo.com/video/76979871?autoplay=0&controls=1"
        );
    }

    #[test]
    fn test_partial_background_flags_do_not_request_background_mode() {
        let policy = PlaybackPolicy {
            controls: true,
            ..PlaybackPolicy::BACKGROUND
        };
        let url = embed_url("1", &policy);
        assert!(!url.contains("background=1"));
        assert!(url.contains("muted=1"));
        assert!(url.ends_with("controls=1"));
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(thumbnail_url("76979871"), "https://vumbnail.com/76979871.jpg");
    }
}

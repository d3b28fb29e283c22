//! Instagram post/reel id extraction
//!
//! Instagram exposes no autoplay control, so the embed URL is the same for
//! every playback policy.

use regex::Regex;
use std::sync::LazyLock;

pub(crate) static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)instagram\.com/p/([^/?#&\s]+)",
        r"(?i)instagram\.com/reels?/([^/?#&\s]+)",
        r"(?i)instagr\.am/p/([^/?#&\s]+)",
        r"(?i)instagram\.com/tv/([^/?#&\s]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid instagram pattern"))
    .collect()
});

pub fn embed_url(id: &str) -> String {
    format!("https://www.instagram.com/p/{}/embed/", id)
}

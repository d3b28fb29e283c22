//! TikTok id extraction. No embed URL is synthesized for TikTok.

use regex::Regex;
use std::sync::LazyLock;

pub(crate) static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)tiktok\.com/(?:[^?#\s]*/)?video/([0-9]+)",
        r"(?i)vm\.tiktok\.com/([A-Za-z0-9]+)",
        r"(?i)vt\.tiktok\.com/([A-Za-z0-9]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid tiktok pattern"))
    .collect()
});

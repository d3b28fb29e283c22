//! Platform classification by case-insensitive substring matching

use crate::resolver::models::Platform;

/// Host fragments checked in priority order. Platform rules always run
/// before the file-extension rule.
const HOST_RULES: &[(Platform, &[&str])] = &[
    (
        Platform::YouTube,
        &["youtube.com", "youtu.be", "youtube-nocookie.com"],
    ),
    (Platform::Vimeo, &["vimeo.com"]),
    (Platform::Instagram, &["instagram.com", "instagr.am"]),
    (Platform::TikTok, &["tiktok.com"]),
];

/// Media file extensions the caller can play natively
pub const DIRECT_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".ogg", ".mov", ".avi", ".m4v"];

/// Map a raw URL to the platform it belongs to.
///
/// Never fails: empty or malformed input yields `Platform::Unknown`.
pub fn classify(url: &str) -> Platform {
    let normalized = url.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Platform::Unknown;
    }

    for (platform, fragments) in HOST_RULES {
        if fragments.iter().any(|fragment| normalized.contains(fragment)) {
            return *platform;
        }
    }

    if DIRECT_EXTENSIONS.iter().any(|ext| normalized.contains(ext)) {
        return Platform::Direct;
    }

    Platform::Unknown
}

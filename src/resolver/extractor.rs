//! Canonical video id extraction

use crate::resolver::models::Platform;
use crate::resolver::platforms::{first_capture, instagram, tiktok, vimeo, youtube};
use regex::Regex;
use tracing::debug;

fn patterns_for(platform: Platform) -> &'static [Regex] {
    match platform {
        Platform::YouTube => youtube::PATTERNS.as_slice(),
        Platform::Vimeo => vimeo::PATTERNS.as_slice(),
        Platform::Instagram => instagram::PATTERNS.as_slice(),
        Platform::TikTok => tiktok::PATTERNS.as_slice(),
        Platform::Direct | Platform::Unknown => &[],
    }
}

/// Pull the canonical video id for `platform` out of `url`.
///
/// Matching runs against the original string so id casing is preserved.
/// `None` means the URL was classified but carries no recognizable id;
/// `Direct` and `Unknown` never carry one.
pub fn extract_id(platform: Platform, url: &str) -> Option<String> {
    if !platform.has_video_id() {
        return None;
    }
    let id = first_capture(patterns_for(platform), url);
    if id.is_none() {
        debug!("No {} video id found in: {}", platform, url);
    }
    id
}

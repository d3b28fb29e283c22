//! YouTube id extraction, embed and thumbnail URLs

use super::{flag, with_query};
use crate::resolver::models::PlaybackPolicy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Ordered id patterns. The loose `watch?...&v=` form runs last.
pub(crate) static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:youtube\.com|youtube-nocookie\.com)/watch\?v=([^&?#\s]+)",
        r"(?i)youtu\.be/([^&?#/\s]+)",
        r"(?i)/embed/([^&?#/\s]+)",
        r"(?i)/v/([^&?#/\s]+)",
        r"(?i)/shorts/([^&?#/\s]+)",
        r"(?i)/live/([^&?#/\s]+)",
        r"(?i)/watch\?(?:[^#\s]*&)?v=([^&?#\s]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid youtube pattern"))
    .collect()
});

/// Host used for synthesized embed URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YouTubeHost {
    #[default]
    Standard,
    /// Privacy-enhanced mode
    NoCookie,
}

impl YouTubeHost {
    pub fn domain(&self) -> &'static str {
        match self {
            YouTubeHost::Standard => "www.youtube.com",
            YouTubeHost::NoCookie => "www.youtube-nocookie.com",
        }
    }
}

/// YouTube thumbnail quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailQuality {
    /// 120x90
    Default,
    /// 320x180
    Medium,
    /// 480x360
    High,
    /// 640x480
    StandardDef,
    /// 1280x720
    #[default]
    MaxRes,
}

impl ThumbnailQuality {
    pub fn filename(&self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default.jpg",
            ThumbnailQuality::Medium => "mqdefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
            ThumbnailQuality::StandardDef => "sddefault.jpg",
            ThumbnailQuality::MaxRes => "maxresdefault.jpg",
        }
    }
}

/// Build the embed URL for `id` under `policy`.
///
/// Looping a single video requires `playlist` to repeat the id.
pub fn embed_url(id: &str, policy: &PlaybackPolicy, host: YouTubeHost) -> String {
    let mut params = vec![("autoplay", flag(policy.autoplay))];
    if policy.muted {
        params.push(("mute", flag(true)));
    }
    if policy.loop_ {
        params.push(("loop", flag(true)));
        params.push(("playlist", id.to_string()));
    }
    params.push(("controls", flag(policy.controls)));
    params.push(("modestbranding", flag(true)));
    params.push(("rel", flag(false)));
    if !policy.controls {
        params.push(("showinfo", flag(false)));
    }

    with_query(&format!("https://{}/embed/{}", host.domain(), id), &params)
}

pub fn thumbnail_url(id: &str, quality: ThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{}/{}", id, quality.filename())
}

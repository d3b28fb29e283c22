//! Data structures for video references and resolved descriptors

use crate::utils::error::VidsourceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External hosting service a URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Vimeo,
    Instagram,
    TikTok,
    /// A plain media file the caller can play natively
    Direct,
    Unknown,
}

impl Platform {
    /// Get the platform tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Vimeo => "vimeo",
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::Direct => "direct",
            Platform::Unknown => "unknown",
        }
    }

    /// Whether this platform carries an extractable video id
    pub fn has_video_id(&self) -> bool {
        !matches!(self, Platform::Direct | Platform::Unknown)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the caller intends to use the video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackContext {
    /// Decorative, non-interactive
    Background,
    /// In-content, some interactivity
    Embedded,
    /// Standard player
    #[default]
    Inline,
}

impl PlaybackContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackContext::Background => "background",
            PlaybackContext::Embedded => "embedded",
            PlaybackContext::Inline => "inline",
        }
    }
}

impl fmt::Display for PlaybackContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaybackContext {
    type Err = VidsourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "background" => Ok(PlaybackContext::Background),
            "embedded" => Ok(PlaybackContext::Embedded),
            "inline" => Ok(PlaybackContext::Inline),
            _ => Err(VidsourceError::UnknownContext(s.to_string())),
        }
    }
}

/// Caller-supplied overrides for interactive contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackOptions {
    pub autoplay: Option<bool>,
    pub controls: Option<bool>,
    #[serde(rename = "loop")]
    pub loop_: Option<bool>,
    pub muted: Option<bool>,
}

impl PlaybackOptions {
    pub fn is_empty(&self) -> bool {
        self.autoplay.is_none()
            && self.controls.is_none()
            && self.loop_.is_none()
            && self.muted.is_none()
    }

    /// Fill every unset field from `fallback`
    pub fn or(self, fallback: PlaybackOptions) -> PlaybackOptions {
        PlaybackOptions {
            autoplay: self.autoplay.or(fallback.autoplay),
            controls: self.controls.or(fallback.controls),
            loop_: self.loop_.or(fallback.loop_),
            muted: self.muted.or(fallback.muted),
        }
    }
}

/// Resolved combination of player flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaybackPolicy {
    pub autoplay: bool,
    pub muted: bool,
    #[serde(rename = "loop")]
    pub loop_: bool,
    pub controls: bool,
}

impl PlaybackPolicy {
    /// Decorative playback: autoplay, muted, looping, no controls
    pub const BACKGROUND: PlaybackPolicy = PlaybackPolicy {
        autoplay: true,
        muted: true,
        loop_: true,
        controls: false,
    };

    /// Baseline for interactive contexts before overrides
    pub const INTERACTIVE: PlaybackPolicy = PlaybackPolicy {
        autoplay: false,
        muted: false,
        loop_: false,
        controls: true,
    };

    /// Derive the policy for a context. Overrides are ignored for `Background`.
    pub fn for_context(context: PlaybackContext, options: PlaybackOptions) -> Self {
        match context {
            PlaybackContext::Background => Self::BACKGROUND,
            PlaybackContext::Embedded | PlaybackContext::Inline => {
                let base = Self::INTERACTIVE;
                PlaybackPolicy {
                    autoplay: options.autoplay.unwrap_or(base.autoplay),
                    muted: options.muted.unwrap_or(base.muted),
                    loop_: options.loop_.unwrap_or(base.loop_),
                    controls: options.controls.unwrap_or(base.controls),
                }
            }
        }
    }

    /// True when every flag matches the decorative background shape
    pub fn is_background(&self) -> bool {
        *self == Self::BACKGROUND
    }
}

/// Input value object: a raw URL plus how it will be played
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoReference {
    /// Raw URL exactly as supplied (not trimmed)
    pub url: String,
    pub context: PlaybackContext,
    #[serde(default)]
    pub options: PlaybackOptions,
}

impl VideoReference {
    pub fn new(url: impl Into<String>, context: PlaybackContext) -> Self {
        Self {
            url: url.into(),
            context,
            options: PlaybackOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PlaybackOptions) -> Self {
        self.options = options;
        self
    }

    pub fn policy(&self) -> PlaybackPolicy {
        PlaybackPolicy::for_context(self.context, self.options)
    }
}

/// Output descriptor handed to the playback surface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVideo {
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ResolvedVideo {
    /// Degenerate descriptor with nothing playable
    pub fn empty() -> Self {
        Self {
            platform: Platform::Unknown,
            video_id: None,
            embed_url: None,
            direct_url: None,
            thumbnail_url: None,
        }
    }

    /// Unrecognized or unresolvable input, raw URL kept for native playback
    pub fn passthrough(url: &str) -> Self {
        Self {
            direct_url: Some(url.to_string()),
            ..Self::empty()
        }
    }

    /// What the consumer should render for this descriptor
    pub fn playback_mode(&self) -> PlaybackMode<'_> {
        match (&self.embed_url, &self.direct_url) {
            (Some(embed), _) => PlaybackMode::Embed(embed),
            (None, Some(direct)) => PlaybackMode::Native(direct),
            (None, None) => PlaybackMode::Fallback,
        }
    }
}

/// Rendering decision derived from a `ResolvedVideo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode<'a> {
    /// Load the platform's own player in an embedding frame
    Embed(&'a str),
    /// Attempt native video playback of the URL
    Native(&'a str),
    /// Nothing playable, show a static poster
    Fallback,
}

//! Descriptor synthesis: classification + extraction + URL templates
//!
//! A single synthesizer parameterized by [`PlaybackPolicy`] produces both the
//! decorative background embed shape and the interactive one. The context a
//! caller asks for selects the policy; nothing about the shape is stored on
//! the returned descriptor.

use crate::resolver::classifier::classify;
use crate::resolver::extractor::extract_id;
use crate::resolver::models::{
    Platform, PlaybackContext, PlaybackOptions, PlaybackPolicy, ResolvedVideo, VideoReference,
};
use crate::resolver::platforms::{instagram, vimeo, youtube};
use crate::utils::config::ResolverSettings;
use tracing::debug;

/// Embed URL for an extracted id, if the platform supports embedding
pub fn embed_url(
    platform: Platform,
    id: &str,
    policy: &PlaybackPolicy,
    settings: &ResolverSettings,
) -> Option<String> {
    match platform {
        Platform::YouTube => Some(youtube::embed_url(id, policy, settings.youtube_host)),
        Platform::Vimeo => Some(vimeo::embed_url(id, policy)),
        Platform::Instagram => Some(instagram::embed_url(id)),
        Platform::TikTok | Platform::Direct | Platform::Unknown => None,
    }
}

/// Best-effort thumbnail URL for an extracted id
pub fn thumbnail_url(platform: Platform, id: &str, settings: &ResolverSettings) -> Option<String> {
    match platform {
        Platform::YouTube => Some(youtube::thumbnail_url(id, settings.youtube_thumbnail)),
        Platform::Vimeo => Some(vimeo::thumbnail_url(id)),
        _ => None,
    }
}

/// Build the descriptor for `url` under an already derived `policy`
pub(crate) fn synthesize(
    url: &str,
    policy: &PlaybackPolicy,
    settings: &ResolverSettings,
) -> ResolvedVideo {
    if url.is_empty() {
        return ResolvedVideo::empty();
    }

    let platform = classify(url);
    debug!("Classified {} as {}", url, platform);

    match platform {
        Platform::Unknown => ResolvedVideo::passthrough(url),
        Platform::Direct => ResolvedVideo {
            platform,
            ..ResolvedVideo::passthrough(url)
        },
        _ => {
            let Some(id) = extract_id(platform, url) else {
                debug!("Degrading unresolvable {} URL to unknown", platform);
                return ResolvedVideo::passthrough(url);
            };

            let embed = embed_url(platform, &id, policy, settings);
            // Platforms whose embed cannot be controlled keep the original link too
            let direct = match platform {
                Platform::Instagram | Platform::TikTok => Some(url.to_string()),
                _ => None,
            };

            ResolvedVideo {
                platform,
                thumbnail_url: thumbnail_url(platform, &id, settings),
                video_id: Some(id),
                embed_url: embed,
                direct_url: direct,
            }
        }
    }
}

/// Resolve a reference with default settings
pub fn resolve(reference: &VideoReference) -> ResolvedVideo {
    synthesize(&reference.url, &reference.policy(), &ResolverSettings::default())
}

/// Boundary form: raw URL, context tag and optional overrides
pub fn resolve_url(url: &str, context: PlaybackContext, options: PlaybackOptions) -> ResolvedVideo {
    let policy = PlaybackPolicy::for_context(context, options);
    synthesize(url, &policy, &ResolverSettings::default())
}

/// Resolve for an interactive (embedded) player
pub fn resolve_for_embed_context(url: &str, options: PlaybackOptions) -> ResolvedVideo {
    resolve_url(url, PlaybackContext::Embedded, options)
}

use crate::resolver::models::{
    PlaybackContext, PlaybackOptions, PlaybackPolicy, ResolvedVideo, VideoReference,
};
use crate::resolver::synthesizer::synthesize;
use crate::utils::config::ResolverSettings;

/// Resolver bound to a set of [`ResolverSettings`]
///
/// Holds no mutable state; one instance can be shared freely across threads.
/// `VideoResolver::default()` behaves exactly like the free functions in
/// [`crate::resolver::synthesizer`].
#[derive(Debug, Clone, Default)]
pub struct VideoResolver {
    settings: ResolverSettings,
}

impl VideoResolver {
    /// Create a new VideoResolver with the given settings
    pub fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    /// Policy for `context`, with configured defaults filling unset overrides
    pub fn policy(&self, context: PlaybackContext, options: PlaybackOptions) -> PlaybackPolicy {
        PlaybackPolicy::for_context(context, options.or(self.settings.default_options))
    }

    pub fn resolve(&self, reference: &VideoReference) -> ResolvedVideo {
        self.resolve_url(&reference.url, reference.context, reference.options)
    }

    pub fn resolve_url(
        &self,
        url: &str,
        context: PlaybackContext,
        options: PlaybackOptions,
    ) -> ResolvedVideo {
        let policy = self.policy(context, options);
        synthesize(url, &policy, &self.settings)
    }

    pub fn resolve_for_embed_context(&self, url: &str, options: PlaybackOptions) -> ResolvedVideo {
        self.resolve_url(url, PlaybackContext::Embedded, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::models::Platform;
    use crate::resolver::platforms::youtube::{ThumbnailQuality, YouTubeHost};
    use crate::resolver::synthesizer;

    const WATCH: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn test_default_matches_free_functions() {
        let resolver = VideoResolver::default();
        for context in [
            PlaybackContext::Background,
            PlaybackContext::Embedded,
            PlaybackContext::Inline,
        ] {
            let reference = VideoReference::new(WATCH, context);
            assert_eq!(resolver.resolve(&reference), synthesizer::resolve(&reference));
        }
    }

    #[test]
    fn test_configured_host_and_thumbnail() {
        let resolver = VideoResolver::new(ResolverSettings {
            youtube_host: YouTubeHost::NoCookie,
            youtube_thumbnail: ThumbnailQuality::High,
            ..Default::default()
        });
        let video =
            resolver.resolve_url(WATCH, PlaybackContext::Inline, PlaybackOptions::default());
        assert_eq!(video.platform, Platform::YouTube);
        assert!(video
            .embed_url
            .unwrap()
            .starts_with("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?"));
        assert_eq!(
            video.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn test_default_options_fill_unset_overrides() {
        let resolver = VideoResolver::new(ResolverSettings {
            default_options: PlaybackOptions {
                autoplay: Some(true),
                muted: Some(true),
                ..Default::default()
            },
            ..Default::default()
        });

        let policy = resolver.policy(PlaybackContext::Inline, PlaybackOptions::default());
        assert!(policy.autoplay && policy.muted && policy.controls);

        // Caller overrides win
        let policy = resolver.policy(
            PlaybackContext::Inline,
            PlaybackOptions {
                autoplay: Some(false),
                ..Default::default()
            },
        );
        assert!(!policy.autoplay);
        assert!(policy.muted);

        // Background ignores both
        assert_eq!(
            resolver.policy(PlaybackContext::Background, PlaybackOptions::default()),
            PlaybackPolicy::BACKGROUND
        );
    }

    #[test]
    fn test_resolve_for_embed_context() {
        let resolver = VideoResolver::default();
        let video = resolver
            .resolve_for_embed_context("https://vimeo.com/76979871", PlaybackOptions::default());
        assert_eq!(
            video.embed_url.as_deref(),
            Some("https://player.vimeo.com/video/76979871?autoplay=0&controls=1")
        );
    }
}

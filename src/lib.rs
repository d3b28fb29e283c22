//! vidsource library
//!
//! Resolves arbitrary video URLs into embeddable playback descriptors.

pub mod resolver;
pub mod utils;

// Re-export main types for easier use
pub use resolver::{
    classify, extract_id, resolve, resolve_for_embed_context, resolve_url, Platform,
    PlaybackContext, PlaybackMode, PlaybackOptions, PlaybackPolicy, ResolvedVideo,
    VideoReference, VideoResolver,
};
pub use utils::{ResolverSettings, VidsourceError};

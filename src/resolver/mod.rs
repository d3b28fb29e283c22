pub mod classifier;
pub mod engine;
pub mod extractor;
pub mod models;
pub mod platforms;
pub mod synthesizer;

pub use classifier::classify;
pub use engine::VideoResolver;
pub use extractor::extract_id;
pub use models::{
    Platform, PlaybackContext, PlaybackMode, PlaybackOptions, PlaybackPolicy, ResolvedVideo,
    VideoReference,
};
pub use synthesizer::{resolve, resolve_for_embed_context, resolve_url};

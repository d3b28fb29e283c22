//! Error handling for vidsource
//!
//! Resolution itself never fails. These errors only surface at the edges:
//! parsing a playback context and loading settings.

use thiserror::Error;

/// Main error type for vidsource
#[derive(Debug, Error)]
pub enum VidsourceError {
    #[error("Unknown playback context: {0} (expected background, embedded or inline)")]
    UnknownContext(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

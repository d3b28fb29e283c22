//! Resolver configuration

use crate::resolver::models::{PlaybackContext, PlaybackOptions, PlaybackPolicy};
use crate::resolver::platforms::youtube::{ThumbnailQuality, YouTubeHost};
use crate::utils::error::VidsourceError;
use crate::utils::platform::settings_path;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Resolver settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Host for synthesized YouTube embeds
    pub youtube_host: YouTubeHost,

    /// Thumbnail size requested from img.youtube.com
    pub youtube_thumbnail: ThumbnailQuality,

    /// Overrides applied to interactive contexts when the caller sets none
    pub default_options: PlaybackOptions,
}

impl ResolverSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, VidsourceError> {
        let content = std::fs::read_to_string(path)?;
        let settings: ResolverSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load the user's settings file if present, defaults otherwise.
    ///
    /// A malformed file is reported and ignored.
    pub fn load_or_default() -> Self {
        let path = settings_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject defaults that would leave an interactive player unstartable
    pub fn validate(&self) -> Result<(), VidsourceError> {
        let policy = PlaybackPolicy::for_context(PlaybackContext::Inline, self.default_options);
        if !policy.controls && !policy.autoplay {
            return Err(VidsourceError::InvalidConfig(
                "default_options disables both controls and autoplay".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), VidsourceError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

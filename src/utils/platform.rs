//! Platform-specific paths for vidsource
//!
//! - macOS: ~/Library/Application Support/vidsource
//! - Windows: %APPDATA%\vidsource
//! - Linux: ~/.config/vidsource

use std::path::PathBuf;

/// Returns the configuration directory
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vidsource")
}

/// Returns the path of the settings file
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

//! Overlay settings loading
//!
//! Settings live in the platform config directory as TOML and are created
//! with defaults on first run.

use std::path::{Path, PathBuf};

use smite_overlay_types::OverlaySettings;

use crate::error::ConfigError;

pub const APP_NAME: &str = "smite-overlay";

/// Load settings from the default config location.
pub fn load_settings() -> Result<OverlaySettings, ConfigError> {
    Ok(confy::load(APP_NAME, None)?)
}

/// Load settings from an explicit file, writing defaults if it doesn't exist.
pub fn load_settings_from(path: &Path) -> Result<OverlaySettings, ConfigError> {
    Ok(confy::load_path(path)?)
}

/// Get the default catalog directory
pub fn default_catalog_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME).join("catalog"))
}

/// Catalog directory from settings, falling back to the default location.
pub fn catalog_dir(settings: &OverlaySettings) -> Option<PathBuf> {
    settings.catalog_dir.clone().or_else(default_catalog_dir)
}

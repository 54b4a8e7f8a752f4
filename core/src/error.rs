//! Error types for the overlay core.
//!
//! Classification and rendering have no failure modes; only the edges
//! (host collaborator, catalog files, settings) can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by the host platform.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to subscribe to features {features:?}: {reason}")]
    Subscribe { features: Vec<String>, reason: String },

    #[error("hotkey '{name}' unavailable: {reason}")]
    Hotkey { name: String, reason: String },

    #[error("failed to query window state: {0}")]
    WindowState(String),
}

/// Errors that can occur while loading the static catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load overlay settings: {0}")]
    Load(#[from] confy::ConfyError),
}

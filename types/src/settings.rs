//! Overlay settings persisted in the user's config directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Game class id the host uses to identify Smite.
pub const SMITE_CLASS_ID: u32 = 8134;

/// Name of the hotkey action that minimizes/restores the in-game window.
pub const TOGGLE_HOTKEY: &str = "showhide";

/// Feature topics the overlay subscribes to by default.
pub const DEFAULT_FEATURES: &[&str] = &[
    "counters",
    "death",
    "items",
    "kill",
    "killed",
    "killer",
    "location",
    "match_info",
    "match",
    "me",
    "phase",
    "rank",
    "revived",
    "roster",
    "team",
];

fn default_features() -> Vec<String> {
    DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect()
}

fn default_toggle_hotkey() -> String {
    TOGGLE_HOTKEY.to_string()
}

fn default_game_class_id() -> u32 {
    SMITE_CLASS_ID
}

fn default_autoscroll_threshold() -> f64 {
    10.0
}

/// Settings for the in-game overlay window.
///
/// Every field has a default so a partial (or empty) config file still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Telemetry topics requested from the host at startup
    #[serde(default = "default_features")]
    pub features: Vec<String>,

    /// Hotkey action name bound to the minimize/restore toggle
    #[serde(default = "default_toggle_hotkey")]
    pub toggle_hotkey: String,

    /// Host game class id, used to look up the hotkey's display text
    #[serde(default = "default_game_class_id")]
    pub game_class_id: u32,

    /// Distance from the bottom (display units) within which a log keeps following new entries
    #[serde(default = "default_autoscroll_threshold")]
    pub autoscroll_threshold: f64,

    /// Directory holding gods.json / items.json / builds.json
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            features: default_features(),
            toggle_hotkey: default_toggle_hotkey(),
            game_class_id: default_game_class_id(),
            autoscroll_threshold: default_autoscroll_threshold(),
            catalog_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let settings: OverlaySettings = toml::from_str("").unwrap();
        assert_eq!(settings, OverlaySettings::default());
        assert_eq!(settings.features.len(), DEFAULT_FEATURES.len());
        assert_eq!(settings.toggle_hotkey, "showhide");
        assert_eq!(settings.game_class_id, 8134);
        assert_eq!(settings.autoscroll_threshold, 10.0);
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let toml = r#"
features = ["kill", "death"]
autoscroll_threshold = 24.0
catalog_dir = "/opt/smite/res"
"#;

        let settings: OverlaySettings = toml::from_str(toml).unwrap();
        assert_eq!(settings.features, vec!["kill", "death"]);
        assert_eq!(settings.autoscroll_threshold, 24.0);
        assert_eq!(settings.catalog_dir, Some(PathBuf::from("/opt/smite/res")));
        assert_eq!(settings.toggle_hotkey, TOGGLE_HOTKEY);
    }

    #[test]
    fn default_features_include_match_topics() {
        let features = default_features();
        assert!(features.iter().any(|f| f == "match_info"));
        assert!(features.iter().any(|f| f == "roster"));
        assert!(!features.iter().any(|f| f == "level"));
    }
}

//! The host platform the overlay runs inside.
//!
//! The host owns event transport, global hotkeys and the window itself. The
//! overlay only sees it through [`OverlayHost`] and the notifications it
//! delivers, one at a time, on a single thread.

use serde::{Deserialize, Serialize};
use smite_overlay_types::WindowState;

use crate::error::HostError;
use crate::telemetry::{InfoUpdate, TelemetryBatch};

/// Capabilities the overlay needs from the host platform.
pub trait OverlayHost {
    /// Request telemetry for the given feature topics.
    fn subscribe(&mut self, features: &[String]) -> Result<(), HostError>;

    /// Route presses of the named hotkey action to the overlay.
    fn register_hotkey(&mut self, name: &str) -> Result<(), HostError>;

    /// Human-readable key combination bound to a hotkey action (e.g. "Ctrl+F").
    fn hotkey_text(&self, name: &str, game_class_id: u32) -> Result<String, HostError>;

    fn window_state(&self) -> Result<WindowState, HostError>;

    /// Fire-and-forget
    fn minimize(&mut self);

    /// Fire-and-forget
    fn restore(&mut self);
}

/// One callback from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostNotification {
    InfoUpdates { info: InfoUpdate },
    NewEvents(TelemetryBatch),
    HotkeyPressed { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_tagged_notifications() {
        let info: HostNotification =
            serde_json::from_str(r#"{"type":"info_updates","info":{"phase":"laning"}}"#).unwrap();
        let HostNotification::InfoUpdates { info } = info else {
            panic!("expected info update");
        };
        assert_eq!(info.get("phase"), Some(&json!("laning")));

        let events: HostNotification = serde_json::from_str(
            r#"{"type":"new_events","events":[{"name":"kill","data":"1"},{"name":"assist"}]}"#,
        )
        .unwrap();
        let HostNotification::NewEvents(batch) = events else {
            panic!("expected event batch");
        };
        assert_eq!(batch.names().collect::<Vec<_>>(), vec!["kill", "assist"]);

        let hotkey: HostNotification =
            serde_json::from_str(r#"{"type":"hotkey_pressed","name":"showhide"}"#).unwrap();
        assert_eq!(
            hotkey,
            HostNotification::HotkeyPressed {
                name: "showhide".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_notification_type() {
        let result = serde_json::from_str::<HostNotification>(r#"{"type":"game_launched"}"#);
        assert!(result.is_err());
    }
}

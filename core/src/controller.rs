//! In-game window controller
//!
//! Wires host telemetry into the two logs and handles the minimize/restore
//! hotkey. Constructed explicitly with its sinks and host; callbacks arrive
//! one at a time, so every handler takes `&mut self`.

use smite_overlay_types::{OverlaySettings, ToggleAction};
use tracing::{info, warn};

use crate::error::HostError;
use crate::host::{HostNotification, OverlayHost};
use crate::log::{LogSink, render};
use crate::telemetry::{InfoUpdate, TelemetryBatch, classify};

/// Controller for the in-game overlay window.
pub struct InGameController<S, H> {
    events_log: S,
    info_log: S,
    host: H,
    settings: OverlaySettings,
    /// Key combination shown in the window header
    hotkey_text: Option<String>,
}

impl<S: LogSink, H: OverlayHost> InGameController<S, H> {
    pub fn new(events_log: S, info_log: S, host: H, settings: OverlaySettings) -> Self {
        Self {
            events_log,
            info_log,
            host,
            settings,
            hotkey_text: None,
        }
    }

    /// Register the toggle hotkey and start listening for telemetry.
    ///
    /// The header text is cosmetic: failing to look it up is logged, not returned.
    pub fn start(&mut self) -> Result<(), HostError> {
        let hotkey = self.settings.toggle_hotkey.as_str();
        self.host.register_hotkey(hotkey)?;

        match self.host.hotkey_text(hotkey, self.settings.game_class_id) {
            Ok(text) => self.hotkey_text = Some(text),
            Err(e) => warn!(error = %e, hotkey, "Failed to look up hotkey text"),
        }

        self.host.subscribe(&self.settings.features)?;

        info!(
            features = self.settings.features.len(),
            hotkey,
            "In-game overlay started"
        );
        Ok(())
    }

    pub fn on_info_updates(&mut self, info: &InfoUpdate) {
        render(&mut self.info_log, info, false);
    }

    /// Significant batches are highlighted in the event log.
    pub fn on_new_events(&mut self, batch: &TelemetryBatch) {
        let highlight = classify(batch);
        render(&mut self.events_log, batch, highlight);
    }

    /// Handle a hotkey press. Returns the window command issued, if any.
    pub fn on_hotkey(&mut self, name: &str) -> Result<Option<ToggleAction>, HostError> {
        info!(hotkey = name, "Hotkey pressed");

        if name != self.settings.toggle_hotkey {
            warn!(hotkey = name, "Ignoring unknown hotkey");
            return Ok(None);
        }

        let state = self.host.window_state()?;
        let action = state.toggle_action();
        match action {
            ToggleAction::Minimize => self.host.minimize(),
            ToggleAction::Restore => self.host.restore(),
        }

        info!(?state, ?action, "Toggled in-game window");
        Ok(Some(action))
    }

    /// Route one host callback to its handler.
    pub fn dispatch(&mut self, notification: HostNotification) -> Result<(), HostError> {
        match notification {
            HostNotification::InfoUpdates { info } => self.on_info_updates(&info),
            HostNotification::NewEvents(batch) => self.on_new_events(&batch),
            HostNotification::HotkeyPressed { name } => {
                self.on_hotkey(&name)?;
            }
        }
        Ok(())
    }

    pub fn events_log(&self) -> &S {
        &self.events_log
    }

    pub fn info_log(&self) -> &S {
        &self.info_log
    }

    /// Mutable access for display adapters that feed reader scrolling back into the sink.
    pub fn events_log_mut(&mut self) -> &mut S {
        &mut self.events_log
    }

    pub fn hotkey_text(&self) -> Option<&str> {
        self.hotkey_text.as_deref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

//! Simulated host platform for replays.

use smite_overlay_core::{HostError, OverlayHost};
use smite_overlay_types::WindowState;
use tracing::{debug, info};

/// Host whose window is a plain state variable.
#[derive(Debug)]
pub struct ReplayHost {
    state: WindowState,
    hotkey_text: String,
    registered: Vec<String>,
    features: Vec<String>,
}

impl ReplayHost {
    pub fn new(hotkey_text: impl Into<String>) -> Self {
        Self {
            state: WindowState::Normal,
            hotkey_text: hotkey_text.into(),
            registered: Vec::new(),
            features: Vec::new(),
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }
}

impl OverlayHost for ReplayHost {
    fn subscribe(&mut self, features: &[String]) -> Result<(), HostError> {
        if features.is_empty() {
            return Err(HostError::Subscribe {
                features: Vec::new(),
                reason: "no features requested".to_string(),
            });
        }
        self.features = features.to_vec();
        debug!(?features, "Subscribed");
        Ok(())
    }

    fn register_hotkey(&mut self, name: &str) -> Result<(), HostError> {
        self.registered.push(name.to_string());
        Ok(())
    }

    fn hotkey_text(&self, name: &str, _game_class_id: u32) -> Result<String, HostError> {
        if !self.registered.iter().any(|r| r == name) {
            return Err(HostError::Hotkey {
                name: name.to_string(),
                reason: "not registered".to_string(),
            });
        }
        Ok(self.hotkey_text.clone())
    }

    fn window_state(&self) -> Result<WindowState, HostError> {
        Ok(self.state)
    }

    fn minimize(&mut self) {
        self.state = WindowState::Minimized;
        info!("Window minimized");
    }

    fn restore(&mut self) {
        self.state = WindowState::Normal;
        info!("Window restored");
    }
}

//! Host window state and the toggle hotkey mapping.

use serde::{Deserialize, Serialize};

/// Window state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Normal,
    Maximized,
    Minimized,
    Closed,
}

/// Command the toggle hotkey issues to the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Minimize,
    Restore,
}

impl WindowState {
    /// Visible windows get minimized, hidden ones restored.
    pub fn toggle_action(self) -> ToggleAction {
        match self {
            WindowState::Normal | WindowState::Maximized => ToggleAction::Minimize,
            WindowState::Minimized | WindowState::Closed => ToggleAction::Restore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_minimizes_visible_windows() {
        assert_eq!(WindowState::Normal.toggle_action(), ToggleAction::Minimize);
        assert_eq!(WindowState::Maximized.toggle_action(), ToggleAction::Minimize);
    }

    #[test]
    fn toggle_restores_hidden_windows() {
        assert_eq!(WindowState::Minimized.toggle_action(), ToggleAction::Restore);
        assert_eq!(WindowState::Closed.toggle_action(), ToggleAction::Restore);
    }

    #[test]
    fn parses_lowercase_state_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            state: WindowState,
        }

        let w: Wrapper = toml::from_str(r#"state = "maximized""#).unwrap();
        assert_eq!(w.state, WindowState::Maximized);
    }
}

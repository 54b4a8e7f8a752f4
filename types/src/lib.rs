//! Shared types for the Smite in-game overlay.
//!
//! Everything here is plain serde data so the overlay core and the replay
//! binary agree on the shape of persisted settings and host window state.

pub mod settings;
pub mod window;

pub use settings::{OverlaySettings, DEFAULT_FEATURES, SMITE_CLASS_ID, TOGGLE_HOTKEY};
pub use window::{ToggleAction, WindowState};

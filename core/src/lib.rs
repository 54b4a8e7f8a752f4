pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod log;
pub mod telemetry;


// Re-exports for convenience
pub use catalog::{Build, Catalog, God, Item};
pub use controller::InGameController;
pub use error::{CatalogError, ConfigError, HostError};
pub use host::{HostNotification, OverlayHost};
pub use log::{LogEntry, LogSink, MemorySink, ScrollMetrics, render};
pub use smite_overlay_types::{OverlaySettings, ToggleAction, WindowState};
pub use telemetry::{InfoUpdate, TelemetryBatch, TelemetryEvent, classify, is_highlight_event};

//! Game telemetry delivered by the host.
//!
//! The host pushes two kinds of notification: batches of named game events
//! (kills, deaths, match boundaries, ...) and info snapshots of the subscribed
//! features. Payloads are opaque JSON; only event names are inspected.

mod classify;
mod events;

pub use classify::{classify, is_highlight_event};
pub use events::{InfoUpdate, TelemetryBatch, TelemetryEvent};

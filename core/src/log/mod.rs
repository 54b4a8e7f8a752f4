//! Append-only visual logs.
//!
//! A [`LogSink`] is any display surface that can take new lines at the end and
//! report whether its view is parked at the bottom. [`render`] serializes a
//! payload into one [`LogEntry`] and follows the bottom only when the reader
//! was already there.
//!
//! Entries are never evicted: a long session grows its sinks without bound.

mod render;
mod sink;

pub use render::render;
pub use sink::{LogEntry, LogSink, MemorySink, NEAR_BOTTOM_THRESHOLD, ScrollMetrics};

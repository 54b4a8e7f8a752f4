use serde::Serialize;
use tracing::{debug, warn};

use super::{LogEntry, LogSink};

/// Append `payload` to `target` as one entry.
///
/// Whether the view follows the new entry is decided from the sink's state
/// before the append: a reader scrolled up into history stays where they are.
pub fn render<S, P>(target: &mut S, payload: &P, highlight: bool)
where
    S: LogSink + ?Sized,
    P: Serialize + ?Sized,
{
    let serialized_payload = serde_json::to_string(payload).unwrap_or_else(|e| {
        warn!(sink = target.id(), error = %e, "Failed to serialize log payload");
        String::new()
    });

    debug!(sink = target.id(), highlight, payload = %serialized_payload, "log line");

    let follow = target.is_near_bottom();

    target.append(LogEntry {
        serialized_payload,
        highlighted: highlight,
    });

    if follow {
        target.scroll_to_bottom();
    }
}

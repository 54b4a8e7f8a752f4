//! Replay loop: feed recorded host notifications through the controller.

use std::io::{BufRead, Write};

use smite_overlay_core::{HostNotification, InGameController, LogSink, MemorySink, OverlayHost};
use tracing::warn;

/// Counts from one replay run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayStats {
    pub dispatched: usize,
    pub skipped: usize,
    pub host_errors: usize,
}

/// Dispatch every JSON line of `input` to the controller.
///
/// Blank lines are ignored; lines that don't parse as a notification, and
/// host failures while handling one, are logged and counted.
pub fn replay<R, S, H>(
    input: R,
    controller: &mut InGameController<S, H>,
) -> std::io::Result<ReplayStats>
where
    R: BufRead,
    S: LogSink,
    H: OverlayHost,
{
    let mut stats = ReplayStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let notification = match serde_json::from_str::<HostNotification>(line) {
            Ok(n) => n,
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Skipping malformed notification");
                stats.skipped += 1;
                continue;
            }
        };

        match controller.dispatch(notification) {
            Ok(()) => stats.dispatched += 1,
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Host error while handling notification");
                stats.host_errors += 1;
            }
        }
    }

    Ok(stats)
}

/// Print a one-line summary per log.
pub fn write_summary<W: Write, S: LogSink>(out: &mut W, sinks: &[&S]) -> std::io::Result<()> {
    for sink in sinks {
        let entries = sink.entries();
        let highlighted = entries.iter().filter(|e| e.highlighted).count();
        writeln!(
            out,
            "{}: {} entries ({} highlighted)",
            sink.id(),
            entries.len(),
            highlighted
        )?;
    }
    Ok(())
}

/// Print what a panel's viewport shows at the end of the replay.
pub fn write_viewport<W: Write>(out: &mut W, sink: &MemorySink) -> std::io::Result<()> {
    let visible = sink.visible();
    writeln!(
        out,
        "--- {} ({} of {} entries visible) ---",
        sink.id(),
        visible.len(),
        sink.len()
    )?;
    for entry in visible {
        let marker = if entry.highlighted { '*' } else { ' ' };
        writeln!(out, "{} {}", marker, entry.serialized_payload)?;
    }
    Ok(())
}

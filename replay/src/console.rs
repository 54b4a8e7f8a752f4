//! Terminal display for the overlay logs.

use std::io::Write;

use smite_overlay_core::{LogEntry, LogSink, MemorySink};

/// Log sink that echoes every appended entry as one terminal line.
///
/// Highlighted entries are marked with `*`. Scroll geometry is tracked by the
/// wrapped [`MemorySink`] so the autoscroll policy behaves as on screen.
pub struct ConsoleSink<W: Write> {
    inner: MemorySink,
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(inner: MemorySink, out: W) -> Self {
        Self { inner, out }
    }

    pub fn memory(&self) -> &MemorySink {
        &self.inner
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> LogSink for ConsoleSink<W> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn append(&mut self, entry: LogEntry) {
        let marker = if entry.highlighted { '*' } else { ' ' };
        if let Err(e) = writeln!(
            self.out,
            "[{}]{} {}",
            self.inner.id(),
            marker,
            entry.serialized_payload
        ) {
            tracing::warn!(sink = self.inner.id(), error = %e, "Failed to write log line");
        }
        self.inner.append(entry);
    }

    fn is_near_bottom(&self) -> bool {
        self.inner.is_near_bottom()
    }

    fn scroll_to_bottom(&mut self) {
        self.inner.scroll_to_bottom()
    }

    fn entries(&self) -> &[LogEntry] {
        self.inner.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smite_overlay_core::render;

    #[test]
    fn echoes_entries_with_highlight_marker() {
        let mut sink = ConsoleSink::new(MemorySink::new("eventsLog"), Vec::new());
        render(&mut sink, &serde_json::json!({ "a": 1 }), true);
        render(&mut sink, &serde_json::json!({ "b": 2 }), false);

        assert_eq!(sink.entries().len(), 2);
        assert_eq!(sink.memory().scroll_requests(), 2);

        let text = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(text, "[eventsLog]* {\"a\":1}\n[eventsLog]  {\"b\":2}\n");
    }
}

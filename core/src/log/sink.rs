/// Default distance (display units) from the bottom that still counts as "at the bottom".
pub const NEAR_BOTTOM_THRESHOLD: f64 = 10.0;

/// One rendered line in a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub serialized_payload: String,
    pub highlighted: bool,
}

/// View geometry of a scrollable log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Offset of the top of the viewport into the content
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    /// Whether the bottom of the viewport is within `threshold` of the content's end.
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.scroll_top + self.viewport_height > self.content_height - threshold
    }

    /// Largest valid `scroll_top`.
    pub fn max_scroll_top(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// A display surface that log entries are appended to.
pub trait LogSink {
    /// Identifier used in diagnostics ("eventsLog", "infoLog")
    fn id(&self) -> &str;

    fn append(&mut self, entry: LogEntry);

    fn is_near_bottom(&self) -> bool;

    fn scroll_to_bottom(&mut self);

    fn entries(&self) -> &[LogEntry];
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn append(&mut self, entry: LogEntry) {
        (**self).append(entry)
    }

    fn is_near_bottom(&self) -> bool {
        (**self).is_near_bottom()
    }

    fn scroll_to_bottom(&mut self) {
        (**self).scroll_to_bottom()
    }

    fn entries(&self) -> &[LogEntry] {
        (**self).entries()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Sink
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory sink with simulated geometry.
///
/// Every entry adds `line_height` to the content height; the viewport has a
/// fixed height. Scroll requests are counted so callers can tell whether the
/// renderer followed the bottom.
#[derive(Debug, Clone)]
pub struct MemorySink {
    id: String,
    entries: Vec<LogEntry>,
    metrics: ScrollMetrics,
    line_height: f64,
    threshold: f64,
    scroll_requests: usize,
}

impl MemorySink {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_geometry(id, 200.0, 16.0)
    }

    pub fn with_geometry(id: impl Into<String>, viewport_height: f64, line_height: f64) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
            metrics: ScrollMetrics {
                scroll_top: 0.0,
                viewport_height,
                content_height: 0.0,
            },
            line_height,
            threshold: NEAR_BOTTOM_THRESHOLD,
            scroll_requests: 0,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Move the view, as a reader dragging the scrollbar would. Clamped to the content.
    pub fn scroll_to(&mut self, scroll_top: f64) {
        self.metrics.scroll_top = scroll_top.clamp(0.0, self.metrics.max_scroll_top());
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Number of times the sink was asked to jump to the bottom
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries currently inside the viewport, top to bottom.
    ///
    /// Degenerate geometry (non-positive or non-finite line height) shows everything.
    pub fn visible(&self) -> &[LogEntry] {
        let len = self.entries.len();
        if !self.line_height.is_finite() || self.line_height <= 0.0 || len == 0 {
            return &self.entries;
        }
        let first = row_count((self.metrics.scroll_top / self.line_height).floor(), len);
        let rows = row_count((self.metrics.viewport_height / self.line_height).ceil(), len);
        let start = first.min(len);
        let end = start.saturating_add(rows).min(len);
        &self.entries[start..end]
    }
}

impl LogSink for MemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        self.metrics.content_height += self.line_height;
    }

    fn is_near_bottom(&self) -> bool {
        self.metrics.is_near_bottom(self.threshold)
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_requests += 1;
        self.metrics.scroll_top = self.metrics.max_scroll_top();
    }

    fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}

/// Convert a row measure to an index, clamped to `0..=len`. NaN and negatives map to 0.
fn row_count(rows: f64, len: usize) -> usize {
    if rows.is_nan() || rows <= 0.0 {
        0
    } else if rows >= len as f64 {
        len
    } else {
        rows as usize
    }
}

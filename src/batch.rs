//! Outbound send queue and flush timing.
//!
//! Locally drawn segments accumulate here and leave as a single `draw`
//! message per flush. Batching trades a bounded worst-case latency (at most
//! the flush delay) for a large reduction in message count under continuous
//! dragging. The queue is implicitly single-color between flushes: the
//! session flushes before every color change, so a switch never relabels
//! already-queued segments.

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;

use crate::consts::FLUSH_DELAY_MS;
use crate::proto::{Segment, Stroke};

/// Accumulates segments for the current local color and tracks the pending
/// flush deadline.
#[derive(Debug)]
pub struct Batcher {
    color: String,
    queue: Vec<Segment>,
    /// When the pending queue is due on the wire, if a flush is armed.
    flush_due: Option<u64>,
}

impl Batcher {
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self { color: color.into(), queue: Vec::new(), flush_due: None }
    }

    /// The color queued segments will be sent with.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Adopt a new color. The caller must flush first so queued segments keep
    /// the color they were drawn with.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Append one segment; arm the flush deadline if none is pending.
    pub fn enqueue(&mut self, segment: Segment, now: u64) {
        self.queue.push(segment);
        if self.flush_due.is_none() {
            self.flush_due = Some(now + FLUSH_DELAY_MS);
        }
    }

    /// The pending flush deadline, if one is armed.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.flush_due
    }

    /// Whether the pending flush deadline has passed.
    #[must_use]
    pub fn due(&self, now: u64) -> bool {
        self.flush_due.is_some_and(|at| now >= at)
    }

    /// Whether any segments are waiting to be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Convert the pending queue into one stroke and disarm the deadline.
    ///
    /// Returns `None` when the queue is empty; an empty flush is a no-op.
    pub fn take_flush(&mut self) -> Option<Stroke> {
        self.flush_due = None;
        if self.queue.is_empty() {
            return None;
        }
        Some(Stroke::new(self.color.clone(), std::mem::take(&mut self.queue)))
    }

    /// Drop the pending queue without sending and disarm the deadline.
    pub fn discard(&mut self) {
        self.queue.clear();
        self.flush_due = None;
    }
}

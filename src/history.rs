//! Color-compacted log of every stroke applied to the canvas.
//!
//! The log answers `history-request` messages and backs the redraw after a
//! resize, so it must reflect exactly what is on screen: it is written for
//! every stroke actually applied to the renderer, local or remote. Rapid
//! same-color scribbling arrives as one small stroke per flush interval;
//! merging consecutive same-color strokes keeps the log compact without
//! losing a single segment.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::proto::Stroke;

/// Ordered, color-compacted record of applied strokes since the last clear.
///
/// Compaction invariant: no two adjacent entries share a color. Only the tail
/// entry is ever mutated; once a different-colored stroke lands after an
/// entry, that entry is final.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<Stroke>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke, merging into the tail entry when the colors match.
    pub fn record(&mut self, stroke: Stroke) {
        match self.entries.last_mut() {
            Some(last) if last.color == stroke.color => last.paths.extend(stroke.paths),
            _ => self.entries.push(stroke),
        }
    }

    /// Empty the log. Called when the canvas is cleared.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// The log in application order; replaying it onto a blank surface
    /// reconstructs the canvas.
    #[must_use]
    pub fn snapshot(&self) -> &[Stroke] {
        &self.entries
    }

    /// Number of compacted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been drawn since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

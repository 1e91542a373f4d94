//! Pointer gesture state machine with move-sample throttling.
//!
//! The host translates mouse and touch events into the same three calls —
//! press, move, release — with canvas-local pixel coordinates, so the engine
//! never cares which input source produced them. Raw pointer-move events can
//! fire far faster than is useful at this stroke width; samples arriving
//! inside an open throttle window are dropped outright to bound event volume,
//! trading a little path fidelity for a bounded message rate.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::MOVE_SAMPLE_MS;
use crate::proto::{Position, Segment};

/// The active pointer gesture, if any.
#[derive(Debug, Clone, Copy, Default)]
enum PointerState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// The pointer is down and drawing.
    Pressing {
        /// Pixel position of the last accepted sample; the start point of the
        /// next emitted segment.
        last_x: f64,
        last_y: f64,
    },
}

/// Converts canvas-local pixel samples into normalized draw segments.
#[derive(Debug, Default)]
pub struct InputCapture {
    state: PointerState,
    /// End of the open move-sample window, if one is open. A pure gate
    /// timestamp; nothing fires when it passes.
    throttle_until: Option<u64>,
}

impl InputCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_pressing(&self) -> bool {
        matches!(self.state, PointerState::Pressing { .. })
    }

    /// Begin a gesture at `(x, y)` pixels on a canvas of edge length `size`.
    ///
    /// Emits a zero-length segment so a press with no movement still paints a
    /// dot. Presses are never throttled.
    pub fn on_press(&mut self, x: f64, y: f64, size: f64) -> Segment {
        self.state = PointerState::Pressing { last_x: x, last_y: y };
        let point = Position::new(x / size, y / size);
        Segment::new(point, point)
    }

    /// Continue a gesture at `(x, y)` pixels.
    ///
    /// Returns the segment from the last accepted sample to this one, or
    /// `None` when no gesture is active or the throttle window is open.
    pub fn on_move(&mut self, x: f64, y: f64, size: f64, now: u64) -> Option<Segment> {
        let PointerState::Pressing { last_x, last_y } = self.state else {
            return None;
        };
        if self.throttle_until.is_some_and(|until| now < until) {
            return None;
        }

        self.state = PointerState::Pressing { last_x: x, last_y: y };
        self.throttle_until = Some(now + MOVE_SAMPLE_MS);

        Some(Segment::new(
            Position::new(last_x / size, last_y / size),
            Position::new(x / size, y / size),
        ))
    }

    /// End the gesture: release, pointer-leave, or touch-cancel.
    ///
    /// Clears the pressing flag only; any open throttle window expires on its
    /// own.
    pub fn on_release(&mut self) {
        self.state = PointerState::Idle;
    }
}

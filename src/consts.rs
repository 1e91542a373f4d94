//! Shared timing and rendering constants.

// ── Timing ──────────────────────────────────────────────────────

/// Minimum interval between accepted pointer-move samples, in milliseconds.
///
/// Moves arriving inside an open window are dropped, not queued.
pub const MOVE_SAMPLE_MS: u64 = 30;

/// Delay between the first enqueued segment and the flush that puts the
/// pending queue on the wire, in milliseconds.
pub const FLUSH_DELAY_MS: u64 = 100;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke line width in pixels. Lines are round-capped.
pub const LINE_WIDTH: f64 = 4.0;

/// Background fill color.
pub const BACKGROUND_COLOR: &str = "white";

/// Drawing color a new session starts with.
pub const DEFAULT_COLOR: &str = "black";

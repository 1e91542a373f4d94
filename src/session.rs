//! Sync session: connection lifecycle, message dispatch, and UI entry points.
//!
//! One session owns one transport connection scoped to a room, plus the
//! renderer, history log, batcher, and input capture for one canvas view.
//! It is the single place where wire messages are built and interpreted.
//! The host feeds it transport lifecycle events (`on_open` / `on_message` /
//! `on_close`), pointer samples, and a timer tick against
//! [`SyncSession::next_deadline`]; everything else is driven from inside.
//!
//! On open the session sends one `history-request` — the handshake that lets
//! a newly joined client catch up. Every connected client is a potential
//! history source: a `history-request` from a peer is answered from the local
//! log, and zero or several responses are tolerated on join.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use log::{debug, warn};
use thiserror::Error;

use crate::batch::Batcher;
use crate::consts::DEFAULT_COLOR;
use crate::history::HistoryLog;
use crate::input::InputCapture;
use crate::proto::{Message, Segment, Stroke};
use crate::render::{RasterSurface, Renderer};

/// Failure to hand a message to the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying connection is gone.
    #[error("connection closed")]
    Closed,
    /// The transport rejected the send.
    #[error("send failed: {0}")]
    Send(String),
}

/// The injected room-scoped message channel.
///
/// The relay behind it is assumed to broadcast every sent message to all
/// *other* members of the same room, preserving per-sender order, and never
/// persist anything.
pub trait Transport {
    /// Hand one encoded message to the channel.
    fn send(&mut self, text: &str) -> Result<(), TransportError>;
}

/// Lifecycle of the session's connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Transport created, not yet open.
    Connecting,
    /// Handshake sent; messages flow.
    Open,
    /// Explicitly closed or transport failure. No automatic reconnect.
    Closed,
}

/// Configuration injected at construction; the engine never reads ambient
/// globals.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Opaque room identifier, used only for logging and by the host when
    /// opening the transport.
    pub room: String,
    /// Canvas edge length in pixels at construction.
    pub canvas_size: f64,
    /// Whether this view accepts pointer input. A read-only room viewer sets
    /// this to `false` and all pointer entry points become no-ops.
    pub drawable: bool,
}

/// The synchronization engine for one room view.
pub struct SyncSession<S, T> {
    config: SessionConfig,
    state: ConnectionState,
    renderer: Renderer<S>,
    history: HistoryLog,
    batcher: Batcher,
    input: InputCapture,
    transport: T,
}

impl<S: RasterSurface, T: Transport> SyncSession<S, T> {
    /// Build a session over an injected surface and transport. The surface is
    /// cleared to the background color; the connection starts out
    /// [`ConnectionState::Connecting`].
    pub fn new(config: SessionConfig, surface: S, transport: T) -> Self {
        let renderer = Renderer::new(surface, config.canvas_size);
        Self {
            config,
            state: ConnectionState::Connecting,
            renderer,
            history: HistoryLog::new(),
            batcher: Batcher::new(DEFAULT_COLOR),
            input: InputCapture::new(),
            transport,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Current connection state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The room this session is scoped to.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.config.room
    }

    /// The current local drawing color.
    #[must_use]
    pub fn color(&self) -> &str {
        self.batcher.color()
    }

    /// The compacted history log, in application order.
    #[must_use]
    pub fn snapshot(&self) -> &[Stroke] {
        self.history.snapshot()
    }

    /// Earliest pending engine deadline, for the host to arm a timer against.
    /// Serviced via [`SyncSession::tick`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.batcher.deadline()
    }

    // ── Transport lifecycle ─────────────────────────────────────

    /// The transport finished connecting. Sends the history handshake.
    pub fn on_open(&mut self) {
        if self.state != ConnectionState::Connecting {
            warn!("room {}: on_open in state {:?}, ignoring", self.config.room, self.state);
            return;
        }
        self.state = ConnectionState::Open;
        debug!("room {}: connected", self.config.room);
        self.send(&Message::HistoryRequest);
    }

    /// One inbound message from the room. Malformed text is discarded; a bad
    /// peer must not take the session down.
    pub fn on_message(&mut self, text: &str) {
        let message = match Message::decode(text) {
            Ok(message) => message,
            Err(err) => {
                warn!("room {}: discarding malformed message: {err}", self.config.room);
                return;
            }
        };

        match message {
            Message::Draw { data } => self.apply(data),
            Message::Clear => {
                self.renderer.apply_clear();
                self.history.reset();
            }
            Message::HistoryRequest => {
                let response = Message::HistoryResponse { data: self.history.snapshot().to_vec() };
                self.send(&response);
            }
            Message::HistoryResponse { data } => {
                // Same apply+record path as `draw`, so a joiner ends up with
                // the same compacted log as an established client.
                for stroke in data {
                    self.apply(stroke);
                }
            }
        }
    }

    /// The transport dropped or the remote end closed. Terminal; the host
    /// decides whether to build a fresh session.
    pub fn on_close(&mut self) {
        debug!("room {}: disconnected", self.config.room);
        self.state = ConnectionState::Closed;
    }

    /// User-initiated teardown: flush the pending queue best-effort, then
    /// stop. All further operations on the wire become no-ops.
    pub fn close(&mut self) {
        if self.state == ConnectionState::Closed {
            return;
        }
        self.flush();
        self.state = ConnectionState::Closed;
    }

    // ── Pointer input ───────────────────────────────────────────

    /// Pointer pressed at canvas-local `(x, y)` pixels.
    ///
    /// The dot is applied locally at once — the first mark of a stroke stays
    /// low-latency — and queued for the next flush.
    pub fn on_press(&mut self, x: f64, y: f64, now: u64) {
        if !self.config.drawable {
            return;
        }
        let segment = self.input.on_press(x, y, self.renderer.size());
        self.draw_local(segment, now);
    }

    /// Pointer moved at canvas-local `(x, y)` pixels. Samples inside the
    /// throttle window are dropped.
    pub fn on_move(&mut self, x: f64, y: f64, now: u64) {
        if !self.config.drawable {
            return;
        }
        if let Some(segment) = self.input.on_move(x, y, self.renderer.size(), now) {
            self.draw_local(segment, now);
        }
    }

    /// Pointer released, left the canvas, or the touch was cancelled.
    pub fn on_release(&mut self) {
        self.input.on_release();
    }

    // ── Timers ──────────────────────────────────────────────────

    /// Service pending deadlines. Fires the flush when it is due; otherwise a
    /// no-op.
    pub fn tick(&mut self, now: u64) {
        if self.batcher.due(now) {
            self.flush();
        }
    }

    // ── UI entry points ─────────────────────────────────────────

    /// Switch the local drawing color. Flushes first so the queue on the wire
    /// is always monochrome.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.flush();
        self.batcher.set_color(color);
    }

    /// Clear the canvas for the whole room.
    ///
    /// A pending send queue is discarded, not flushed: flushing first would
    /// transmit strokes the very next message erases.
    pub fn clear_canvas(&mut self) {
        self.batcher.discard();
        self.renderer.apply_clear();
        self.history.reset();
        self.send(&Message::Clear);
    }

    /// Adopt a new canvas edge length, clear, and replay the retained history
    /// at the new scale. Purely local; peers are unaffected.
    pub fn resize(&mut self, size: f64) {
        self.renderer.resize(size);
        for stroke in self.history.snapshot() {
            self.renderer.apply_draw(stroke);
        }
    }

    // ── Internals ───────────────────────────────────────────────

    /// Apply a stroke to the surface and record it, keeping screen and log in
    /// agreement.
    fn apply(&mut self, stroke: Stroke) {
        self.renderer.apply_draw(&stroke);
        self.history.record(stroke);
    }

    /// Apply one locally drawn segment and queue it for transmission.
    fn draw_local(&mut self, segment: Segment, now: u64) {
        self.apply(Stroke::new(self.batcher.color().to_owned(), vec![segment]));
        self.batcher.enqueue(segment, now);
    }

    /// Put the pending queue on the wire as one `draw` message. Empty queue:
    /// no-op.
    fn flush(&mut self) {
        if let Some(stroke) = self.batcher.take_flush() {
            self.send(&Message::Draw { data: stroke });
        }
    }

    /// Encode and hand off to the transport. Only an open session sends;
    /// everything else degrades to a logged no-op.
    fn send(&mut self, message: &Message) {
        if self.state != ConnectionState::Open {
            warn!("room {}: dropping outbound message in state {:?}", self.config.room, self.state);
            return;
        }
        match message.encode() {
            Ok(text) => {
                if let Err(err) = self.transport.send(&text) {
                    warn!("room {}: send failed: {err}", self.config.room);
                }
            }
            Err(err) => warn!("room {}: encode failed: {err}", self.config.room),
        }
    }
}

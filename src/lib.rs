//! Synchronization engine for a shared drawing canvas.
//!
//! Multiple participants draw in a shared room: every stroke one participant
//! draws is broadcast to every other participant, and a late joiner catches up
//! by requesting the room's drawing history from its peers. This crate is the
//! client-side engine for that exchange — the wire protocol, the pointer-input
//! throttling and outbound batching that turn raw samples into messages, the
//! color-compacted history log, and the session that ties them together.
//!
//! The engine is host-driven and performs no IO of its own. The host injects a
//! [`render::RasterSurface`] (the drawing target), a [`session::Transport`]
//! (the room-scoped message channel), and millisecond timestamps on every
//! time-sensitive call; it services the engine's single pending deadline via
//! [`session::SyncSession::tick`]. DOM wiring, widgets, and the relay server
//! that fans messages out to room members all live outside this crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`proto`] | Wire message types and JSON encoding |
//! | [`render`] | Stroke renderer over an injected raster surface |
//! | [`input`] | Pointer gesture state machine with move-sample throttling |
//! | [`batch`] | Outbound send queue and flush timing |
//! | [`history`] | Color-compacted log of applied strokes |
//! | [`session`] | Connection lifecycle, message dispatch, UI entry points |
//! | [`consts`] | Shared timing and rendering constants |

pub mod batch;
pub mod consts;
pub mod history;
pub mod input;
pub mod proto;
pub mod render;
pub mod session;

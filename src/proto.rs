//! Wire protocol: positions, segments, strokes, and the message envelope.
//!
//! Every exchange between drawing clients is one JSON object per message,
//! tagged by `method`. Coordinates travel as strings with fixed 4-decimal
//! precision so message size stays bounded and values survive round trips
//! without floating-point drift; both the string form and a bare JSON number
//! are accepted on the way in. The relay never inspects any of this — it
//! forwards each message verbatim to the other members of the room.

#[cfg(test)]
#[path = "proto_test.rs"]
mod proto_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to encode or decode a wire message.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The message could not be serialized to JSON.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),
    /// The inbound text is not valid JSON, or its `method` is unknown, or its
    /// payload has the wrong shape.
    #[error("failed to decode message: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A point on the canvas, each axis normalized to [0,1] by dividing the pixel
/// coordinate by the canvas edge length at capture time.
///
/// Normalization lets two clients with different canvas pixel sizes render
/// strokes in the same relative location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal axis, 0.0 = left edge, 1.0 = right edge.
    #[serde(with = "fixed4")]
    pub x: f64,
    /// Vertical axis, 0.0 = top edge, 1.0 = bottom edge.
    #[serde(with = "fixed4")]
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One straight line between two normalized positions, drawn between two
/// samples of a pointer gesture. On the wire: a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment(pub Position, pub Position);

impl Segment {
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self(start, end)
    }

    /// Where the segment begins.
    #[must_use]
    pub fn start(&self) -> Position {
        self.0
    }

    /// Where the segment ends.
    #[must_use]
    pub fn end(&self) -> Position {
        self.1
    }
}

/// One monochrome, ordered collection of segments treated as one atomic draw
/// operation on the wire.
///
/// Invariant: all segments share exactly one color. `paths` preserves draw
/// order for replay fidelity with round-capped line rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// CSS color string, e.g. `"black"` or `"#ff0000"`.
    pub color: String,
    /// Segments in the order they were drawn.
    pub paths: Vec<Segment>,
}

impl Stroke {
    #[must_use]
    pub fn new(color: impl Into<String>, paths: Vec<Segment>) -> Self {
        Self { color: color.into(), paths }
    }
}

/// The wire envelope exchanged between drawing clients.
///
/// `draw` and `history-response` carry a payload; `clear` and
/// `history-request` are bare. An unknown `method` fails to decode and is
/// discarded by the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum Message {
    /// Apply one stroke to the canvas.
    Draw {
        /// The stroke to apply.
        data: Stroke,
    },
    /// Reset the canvas to the background color and empty the history.
    Clear,
    /// Ask the room for its current drawing state.
    HistoryRequest,
    /// The compacted log that reconstructs the sender's canvas from blank,
    /// in application order.
    HistoryResponse {
        /// Strokes to replay, in order.
        data: Vec<Stroke>,
    },
}

impl Message {
    /// Serialize to the one-JSON-object-per-message wire form.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    /// Parse a message from inbound wire text.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }
}

/// Serde adapter for coordinates: fixed 4-decimal strings out, string or
/// number in.
mod fixed4 {
    use serde::de::{self, Deserializer, Unexpected};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:.4}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        struct CoordVisitor;

        impl de::Visitor<'_> for CoordVisitor {
            type Value = f64;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a coordinate as a JSON number or fixed-precision string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
                Ok(v)
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
                Ok(v as f64)
            }

            #[allow(clippy::cast_precision_loss)]
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
                Ok(v as f64)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(CoordVisitor)
    }
}

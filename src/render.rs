//! Stroke renderer over an injected raster surface.
//!
//! The engine never touches a concrete canvas element; the host hands it
//! anything that can stroke round-capped line segments at pixel coordinates
//! and flood-fill itself. The renderer owns the current edge length and does
//! the normalized-to-pixel scaling, so surfaces stay dumb.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{BACKGROUND_COLOR, LINE_WIDTH};
use crate::proto::Stroke;

/// One line segment in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// The injected drawing target: a square raster surface of fixed edge length.
///
/// Out-of-range coordinates are clipped by the surface's own semantics, never
/// validated by the engine.
pub trait RasterSurface {
    /// Stroke round-capped lines of the given width, in `segments` order.
    fn stroke_segments(&mut self, color: &str, width: f64, segments: &[PixelSegment]);

    /// Flood the entire surface with one color.
    fn fill(&mut self, color: &str);
}

/// Draws strokes onto a [`RasterSurface`], scaling normalized coordinates by
/// the current edge length.
pub struct Renderer<S> {
    surface: S,
    size: f64,
}

impl<S: RasterSurface> Renderer<S> {
    /// Wrap a surface of the given edge length and clear it to the background
    /// color.
    pub fn new(mut surface: S, size: f64) -> Self {
        surface.fill(BACKGROUND_COLOR);
        Self { surface, size }
    }

    /// Current edge length in pixels.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Stroke every segment of `stroke` in `paths` order with the stroke's
    /// color.
    pub fn apply_draw(&mut self, stroke: &Stroke) {
        let segments: Vec<PixelSegment> = stroke
            .paths
            .iter()
            .map(|seg| PixelSegment {
                x0: seg.start().x * self.size,
                y0: seg.start().y * self.size,
                x1: seg.end().x * self.size,
                y1: seg.end().y * self.size,
            })
            .collect();
        self.surface
            .stroke_segments(&stroke.color, LINE_WIDTH, &segments);
    }

    /// Fill the whole surface with the background color.
    pub fn apply_clear(&mut self) {
        self.surface.fill(BACKGROUND_COLOR);
    }

    /// Adopt a new edge length and clear to the background color.
    ///
    /// Redrawing retained history is the session's decision, not the
    /// renderer's.
    pub fn resize(&mut self, size: f64) {
        self.size = size;
        self.apply_clear();
    }
}

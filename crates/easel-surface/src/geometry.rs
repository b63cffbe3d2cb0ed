//! Surface geometry: configuration, derived buffer sizing, and the
//! CSS-pixel ↔ buffer-space coordinate mapping.
//!
//! The mapping composes CSS→local scaling with whatever pixel-ratio
//! scaling was baked into the buffer size, in one step — the buffer
//! dimensions already reflect the ratio, so no separate division appears
//! anywhere.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Surface configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// CSS-pixel width of the on-screen element.
    pub width: f64,
    /// CSS-pixel height of the on-screen element.
    pub height: f64,
    /// Device-pixel-to-CSS-pixel scale. The internal buffer is sized
    /// `css × ratio`.
    pub pixel_ratio: f64,
    /// When false, the surface ignores input entirely — `dispatch` and the
    /// per-kind entry points become no-ops.
    pub events_enabled: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            pixel_ratio: 1.0,
            events_enabled: true,
        }
    }
}

impl SurfaceConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }
}

/// Geometry derived from a config. Resize replaces the whole value via
/// [`SurfaceGeometry::resized`] — nothing mutates in place, so the
/// single-writer rule survives a port to a threaded host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
    /// Internal buffer width in device pixels (`css_width × pixel_ratio`).
    pub buffer_width: f64,
    /// Internal buffer height in device pixels (`css_height × pixel_ratio`).
    pub buffer_height: f64,
}

impl SurfaceGeometry {
    pub fn from_config(config: &SurfaceConfig) -> Self {
        Self {
            css_width: config.width,
            css_height: config.height,
            pixel_ratio: config.pixel_ratio,
            buffer_width: config.width * config.pixel_ratio,
            buffer_height: config.height * config.pixel_ratio,
        }
    }

    /// Pure resize transition: same pixel ratio, new CSS size, re-derived
    /// buffer dimensions.
    #[must_use]
    pub fn resized(&self, width: f64, height: f64) -> Self {
        Self {
            css_width: width,
            css_height: height,
            pixel_ratio: self.pixel_ratio,
            buffer_width: width * self.pixel_ratio,
            buffer_height: height * self.pixel_ratio,
        }
    }

    /// The full drawable region, `(0, 0)` to `(buffer_width, buffer_height)`.
    pub fn buffer_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.buffer_width, self.buffer_height)
    }
}

/// A point in CSS-pixel viewport space, as reported by the host input
/// system. Distinct from `kurbo::Point` (buffer-local) so the two spaces
/// cannot be confused.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Map a client (viewport) position into buffer-local space.
///
/// Takes the live bounding box; nothing is cached, so layout changes
/// between events need no invalidation. A zero-area box degenerates to
/// non-finite output; callers must not map against an unlaid-out surface.
pub fn client_to_buffer(
    bbox: Rect,
    buffer_width: f64,
    buffer_height: f64,
    client: ClientPoint,
) -> Point {
    let scale_x = buffer_width / bbox.width();
    let scale_y = buffer_height / bbox.height();
    Point::new((client.x - bbox.x0) * scale_x, (client.y - bbox.y0) * scale_y)
}

/// Exact inverse of [`client_to_buffer`].
pub fn buffer_to_client(
    bbox: Rect,
    buffer_width: f64,
    buffer_height: f64,
    point: Point,
) -> ClientPoint {
    let scale_x = buffer_width / bbox.width();
    let scale_y = buffer_height / bbox.height();
    ClientPoint::new(point.x / scale_x + bbox.x0, point.y / scale_y + bbox.y0)
}

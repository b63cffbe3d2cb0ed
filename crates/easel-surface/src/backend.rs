//! Host-surface abstraction.
//!
//! All host glue — element creation, CSS mutation, attribute sizing,
//! cursor styling — sits behind this trait. A backend targeting any
//! environment works, as long as it can report a bounding box and hand
//! out a draw context.

use crate::geometry::SurfaceGeometry;
use easel_scene::DrawContext;
use kurbo::Rect;

pub trait SurfaceBackend {
    /// Live bounding box of the on-screen element in CSS-pixel space.
    /// Called on every mapping; the adapter never caches it, so layout
    /// changes between events are picked up without invalidation.
    fn bounding_box(&self) -> Rect;

    /// The drawing context for the internal pixel buffer.
    fn draw_context(&mut self) -> &mut dyn DrawContext;

    /// Push derived sizing (CSS size plus buffer dimensions) to the
    /// element. Called once at construction and again on every resize.
    fn apply_geometry(&mut self, geometry: &SurfaceGeometry);

    /// Reflect the visual cursor hint on the element.
    fn set_cursor(&mut self, cursor: &str);

    /// Remove the element from its container on teardown.
    fn detach(&mut self);
}

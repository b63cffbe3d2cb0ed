//! Surface lifecycle and the public adapter API.
//!
//! A [`Surface`] binds one scene graph to one host backend. It owns the
//! derived geometry and the frame/destroyed state; the backend owns the
//! actual element and pixel buffer. All operations take `&self`/`&mut
//! self` on the host's single loop — resize can never overlap an
//! in-flight frame.

use crate::backend::SurfaceBackend;
use crate::frame::FrameState;
use crate::geometry::{
    ClientPoint, SurfaceConfig, SurfaceGeometry, buffer_to_client, client_to_buffer,
};
use easel_scene::subscribers::HandlerError;
use easel_scene::{EventKind, PointerEvent, Scene, SubscriberSet};
use kurbo::Point;

/// A drawing surface bound to a retained scene graph.
pub struct Surface<S, B> {
    pub(crate) scene: S,
    pub(crate) backend: B,
    pub(crate) geometry: SurfaceGeometry,
    /// The surface's own handlers — it receives every event that resolves
    /// to no shape emitter.
    pub(crate) subscribers: SubscriberSet,
    pub(crate) state: FrameState,
    pub(crate) destroyed: bool,
    pub(crate) events_enabled: bool,
}

impl<S: Scene, B: SurfaceBackend> Surface<S, B> {
    /// Bind a scene to a backend, deriving geometry from the config and
    /// pushing it to the element.
    pub fn new(scene: S, mut backend: B, config: SurfaceConfig) -> Self {
        let geometry = SurfaceGeometry::from_config(&config);
        backend.apply_geometry(&geometry);

        Self {
            scene,
            backend,
            geometry,
            subscribers: SubscriberSet::new(),
            state: FrameState::Idle,
            destroyed: false,
            events_enabled: config.events_enabled,
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    /// Internal buffer width in device pixels.
    pub fn buffer_width(&self) -> f64 {
        self.geometry.buffer_width
    }

    /// Internal buffer height in device pixels.
    pub fn buffer_height(&self) -> f64 {
        self.geometry.buffer_height
    }

    pub fn frame_state(&self) -> FrameState {
        self.state
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Register a handler on the surface itself. These run when an event
    /// resolves to no shape emitter (background clicks, unsubscribed
    /// chains).
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&mut PointerEvent) -> Result<(), HandlerError> + 'static,
    {
        self.subscribers.on(kind, handler);
    }

    /// Map a client (viewport) position into buffer-local space, against
    /// the element's live bounding box.
    pub fn map_client_to_local(&self, client_x: f64, client_y: f64) -> Point {
        client_to_buffer(
            self.backend.bounding_box(),
            self.geometry.buffer_width,
            self.geometry.buffer_height,
            ClientPoint::new(client_x, client_y),
        )
    }

    /// Map a buffer-local position back to client space.
    pub fn map_local_to_client(&self, x: f64, y: f64) -> ClientPoint {
        buffer_to_client(
            self.backend.bounding_box(),
            self.geometry.buffer_width,
            self.geometry.buffer_height,
            Point::new(x, y),
        )
    }

    /// Resize to a new CSS-pixel size. The pixel ratio is carried over and
    /// the buffer re-derived; the new geometry is pushed to the backend.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.geometry = self.geometry.resized(width, height);
        self.backend.apply_geometry(&self.geometry);
    }

    /// Tear the surface down. Terminal: every later `render_frame` is a
    /// no-op. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.backend.detach();
    }
}

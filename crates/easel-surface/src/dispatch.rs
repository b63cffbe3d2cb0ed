//! Native input → hit-test → synthetic event dispatch.
//!
//! One pipeline for every supported input kind: map the client position
//! into buffer space, hit-test the scene, build the event, resolve the
//! emitter by bubbling, reflect the cursor hint, emit. Handler failures
//! are not contained here — they surface to the caller as
//! [`DispatchError`]; only the render loop owns containment.

use crate::backend::SurfaceBackend;
use crate::geometry::{ClientPoint, client_to_buffer};
use crate::router::resolve_emitter;
use crate::surface::Surface;
use easel_scene::subscribers::HandlerError;
use easel_scene::{EventKind, EventTarget, NativeEvent, PointerEvent, Scene};
use thiserror::Error;

/// Cursor applied when the hit shape carries no hint, or nothing was hit.
pub const DEFAULT_CURSOR: &str = "default";

/// A user handler failed while an event was being emitted.
#[derive(Debug, Error)]
#[error("handler failed during {} dispatch", .kind.as_str())]
pub struct DispatchError {
    pub kind: EventKind,
    #[source]
    pub source: HandlerError,
}

impl<S: Scene, B: SurfaceBackend> Surface<S, B> {
    /// Route one native input occurrence through the scene.
    ///
    /// The constructed event's `target`/`current_target` are the hit shape
    /// (or the surface); the resolved emitter receives it. No-op when
    /// events are disabled in the config.
    pub fn dispatch(&mut self, kind: EventKind, native: NativeEvent) -> Result<(), DispatchError> {
        if !self.events_enabled {
            return Ok(());
        }

        let point = client_to_buffer(
            self.backend.bounding_box(),
            self.geometry.buffer_width,
            self.geometry.buffer_height,
            ClientPoint::new(native.client_x, native.client_y),
        );
        let hit = self.scene.hit_test(point.x, point.y);

        let target = match hit {
            Some(idx) => EventTarget::Node(idx),
            None => EventTarget::Surface,
        };
        let mut event = PointerEvent::new(kind, native, point, target);
        let emitter = resolve_emitter(&self.scene, hit, &event);

        let cursor = hit
            .and_then(|idx| self.scene.cursor_hint(idx))
            .unwrap_or_else(|| DEFAULT_CURSOR.to_string());
        self.backend.set_cursor(&cursor);

        let emitted = match emitter {
            Some(idx) => self.scene.emit(idx, &mut event),
            None => self.subscribers.emit(&mut event),
        };
        emitted.map_err(|source| DispatchError { kind, source })
    }

    // ─── Per-kind entry points ───────────────────────────────────────────

    /// Host `mouseover` relabeled into the scene vocabulary.
    pub fn pointer_enter(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::Enter, native)
    }

    /// Host `mouseout` relabeled into the scene vocabulary.
    pub fn pointer_leave(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::Leave, native)
    }

    pub fn pointer_move(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::Move, native)
    }

    pub fn pointer_down(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::Down, native)
    }

    pub fn pointer_up(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::Up, native)
    }

    pub fn click(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::Click, native)
    }

    pub fn double_click(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::DoubleClick, native)
    }

    pub fn touch_start(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::TouchStart, native)
    }

    pub fn touch_move(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::TouchMove, native)
    }

    pub fn touch_end(&mut self, native: NativeEvent) -> Result<(), DispatchError> {
        self.dispatch(EventKind::TouchEnd, native)
    }
}

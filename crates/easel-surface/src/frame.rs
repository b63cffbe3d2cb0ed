//! The guarded clear-then-redraw frame pass.
//!
//! Frames are caller-driven: the surface performs no scheduling of its
//! own. A draw failure is contained to its frame — logged, abandoned —
//! so a single malformed shape can never take the loop down or leave the
//! buffer mid-clear with stale state flags.

use crate::backend::SurfaceBackend;
use crate::surface::Surface;
use easel_scene::Scene;

/// Transient frame state. `Drawing` is only observable from within a draw
/// pass; both the success and failure paths return to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    #[default]
    Idle,
    Drawing,
}

impl<S: Scene, B: SurfaceBackend> Surface<S, B> {
    /// Render one frame: clear the full buffer, then run the scene's draw
    /// pass.
    ///
    /// A destroyed surface no-ops. The buffer is cleared exactly once per
    /// call regardless of the draw outcome; a failed draw is logged as a
    /// warning and the frame abandoned — the next call is an independent
    /// attempt.
    pub fn render_frame(&mut self) {
        if self.destroyed {
            return;
        }

        self.state = FrameState::Drawing;

        let buffer = self.geometry.buffer_rect();
        let ctx = self.backend.draw_context();
        ctx.clear_rect(buffer);

        if let Err(err) = self.scene.draw(ctx) {
            log::warn!("draw pass failed, frame abandoned: {err}");
        }

        self.state = FrameState::Idle;
    }
}

//! Bubbling emitter resolution.
//!
//! Given the topmost hit shape, walk upward through ancestors to find the
//! node that should receive the event: the first one with at least one
//! handler registered. The check is "has any handler", not "has a handler
//! for this kind"; kind matching happens at emission, not here.

use easel_scene::{NodeIndex, PointerEvent, Scene};

/// Resolve which node receives the event, or `None` when the caller
/// should fall back to the surface itself.
///
/// Single-pass upward walk, bounded by tree depth: each step strictly
/// moves to a parent and the root has none. A stopped event halts the
/// ascent before the next parent step.
pub fn resolve_emitter<S: Scene>(
    scene: &S,
    hit: Option<NodeIndex>,
    event: &PointerEvent,
) -> Option<NodeIndex> {
    let mut current = hit?;
    loop {
        if scene.has_subscribers(current) {
            return Some(current);
        }
        if event.propagation_stopped() {
            return None;
        }
        current = scene.parent(current)?;
    }
}

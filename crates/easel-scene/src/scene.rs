//! The collaborator contract consumed by `easel-surface`.
//!
//! The adapter never touches arena internals — everything it needs from a
//! retained scene graph is this read-plus-emit surface. Any graph that can
//! answer these six questions can sit behind a surface.

use crate::draw::{DrawContext, DrawError, draw_scene};
use crate::event::PointerEvent;
use crate::hit::hit_test;
use crate::model::SceneArena;
use crate::subscribers::HandlerError;
use petgraph::graph::NodeIndex;

pub trait Scene {
    /// Topmost visible shape containing the buffer-local point, or `None`.
    fn hit_test(&self, x: f64, y: f64) -> Option<NodeIndex>;

    /// Parent handle of a node; `None` at the root.
    fn parent(&self, node: NodeIndex) -> Option<NodeIndex>;

    /// Whether the node has at least one handler registered, for any event
    /// kind. The bubbling walk consumes exactly this coarse answer.
    fn has_subscribers(&self, node: NodeIndex) -> bool;

    /// The node's visual cursor hint, if it carries one.
    fn cursor_hint(&self, node: NodeIndex) -> Option<String>;

    /// Deliver an event to the node's handlers. Handler failures propagate.
    fn emit(&mut self, node: NodeIndex, event: &mut PointerEvent) -> Result<(), HandlerError>;

    /// Execute the draw pass against a context. May fail; the render loop
    /// contains the failure.
    fn draw(&self, ctx: &mut dyn DrawContext) -> Result<(), DrawError>;
}

impl Scene for SceneArena {
    fn hit_test(&self, x: f64, y: f64) -> Option<NodeIndex> {
        hit_test(self, x, y)
    }

    fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        SceneArena::parent(self, node)
    }

    fn has_subscribers(&self, node: NodeIndex) -> bool {
        self.node(node).subscribers.has_any()
    }

    fn cursor_hint(&self, node: NodeIndex) -> Option<String> {
        self.node(node).cursor.clone()
    }

    fn emit(&mut self, node: NodeIndex, event: &mut PointerEvent) -> Result<(), HandlerError> {
        self.node_mut(node).subscribers.emit(event)
    }

    fn draw(&self, ctx: &mut dyn DrawContext) -> Result<(), DrawError> {
        draw_scene(self, ctx)
    }
}

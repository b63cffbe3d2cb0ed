//! Scene tree → draw-context commands.
//!
//! Walks the scene in paint order (parents before children, siblings in
//! insertion order) and emits commands against a [`DrawContext`]. Any
//! command failure aborts the walk and surfaces as a [`DrawError`]; the
//! render loop decides what to do with it.

use crate::model::{SceneArena, ShapeKind, ShapeNode};
use kurbo::Rect;
use peniko::Color;
use petgraph::graph::NodeIndex;
use thiserror::Error;

/// A failure raised while executing the draw pass.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The backing context refused or failed a draw command.
    #[error("draw command failed: {0}")]
    Command(String),
    /// The context is gone (surface torn down mid-frame).
    #[error("draw context lost: {0}")]
    ContextLost(String),
}

/// Command sink for the draw pass.
///
/// Implementations rasterize however they like — the scene only describes
/// *what* to paint. Ellipse commands receive the shape's bounding box.
pub trait DrawContext {
    /// Wipe a region of the buffer. Infallible, matching bitmap-context
    /// semantics.
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DrawError>;
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) -> Result<(), DrawError>;
    fn fill_ellipse(&mut self, bounds: Rect, color: Color) -> Result<(), DrawError>;
    fn stroke_ellipse(&mut self, bounds: Rect, color: Color, width: f64) -> Result<(), DrawError>;
}

/// Paint the entire scene to a draw context.
///
/// Call once per frame against a freshly-cleared buffer.
pub fn draw_scene(scene: &SceneArena, ctx: &mut dyn DrawContext) -> Result<(), DrawError> {
    draw_node(scene, scene.root(), ctx)
}

fn draw_node(
    scene: &SceneArena,
    idx: NodeIndex,
    ctx: &mut dyn DrawContext,
) -> Result<(), DrawError> {
    let node = scene.node(idx);
    if !node.visible {
        return Ok(());
    }

    match node.kind {
        ShapeKind::Root => {}

        ShapeKind::Group => {
            if let Some(fill) = node.fill {
                log::trace!("group bg {}", node.id);
                ctx.fill_rect(node.bounds, fill)?;
            }
        }

        ShapeKind::Rect => paint_rect(node, ctx)?,

        ShapeKind::Ellipse => paint_ellipse(node, ctx)?,
    }

    for child_idx in scene.children(idx) {
        draw_node(scene, child_idx, ctx)?;
    }

    Ok(())
}

// ─── Shape painters ──────────────────────────────────────────────────────

fn paint_rect(node: &ShapeNode, ctx: &mut dyn DrawContext) -> Result<(), DrawError> {
    if let Some(fill) = node.fill {
        ctx.fill_rect(node.bounds, fill)?;
    }
    if let Some(stroke) = node.stroke {
        ctx.stroke_rect(node.bounds, stroke.color, stroke.width)?;
    }
    Ok(())
}

fn paint_ellipse(node: &ShapeNode, ctx: &mut dyn DrawContext) -> Result<(), DrawError> {
    if let Some(fill) = node.fill {
        ctx.fill_ellipse(node.bounds, fill)?;
    }
    if let Some(stroke) = node.stroke {
        ctx.stroke_ellipse(node.bounds, stroke.color, stroke.width)?;
    }
    Ok(())
}

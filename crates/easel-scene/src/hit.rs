//! Hit testing: point → shape lookup.
//!
//! Reverse-walks the scene tree (front-to-back) to find which shape is at
//! a given buffer-local (x, y) position.

use crate::model::{SceneArena, ShapeKind};
use kurbo::Point;
use petgraph::graph::NodeIndex;

/// Find the topmost visible shape at position (x, y), buffer-local space.
/// Returns `None` if no shape is hit (background).
pub fn hit_test(scene: &SceneArena, x: f64, y: f64) -> Option<NodeIndex> {
    hit_test_node(scene, scene.root(), Point::new(x, y))
}

fn hit_test_node(scene: &SceneArena, idx: NodeIndex, p: Point) -> Option<NodeIndex> {
    let node = scene.node(idx);
    if !node.visible {
        return None;
    }

    // Check children in reverse (last painted = topmost)
    for &child_idx in scene.children(idx).iter().rev() {
        if let Some(hit) = hit_test_node(scene, child_idx, p) {
            return Some(hit);
        }
    }

    // Check self
    if matches!(node.kind, ShapeKind::Root) {
        return None;
    }

    if node.contains(p) {
        return Some(idx);
    }

    None
}

//! Shape nodes and the retained scene arena.
//!
//! The scene is a tree of [`ShapeNode`] values stored in a petgraph arena;
//! edges run parent → child, and a node reaches its parent through the
//! graph rather than an owning back-pointer. Shapes carry their own bounds
//! in buffer-local (device-pixel) space — there is no layout solver.

use crate::id::ShapeId;
use crate::subscribers::SubscriberSet;
use kurbo::{Point, Rect};
use peniko::Color;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use std::collections::HashMap;

// ─── Shapes ──────────────────────────────────────────────────────────────

/// Stroke applied around a shape's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0, 0, 0),
            width: 1.0,
        }
    }
}

/// The node kinds in the scene tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Root of the scene. Never hit-tested, never painted.
    Root,
    /// Container — painted only when it carries a fill of its own.
    Group,
    Rect,
    Ellipse,
}

/// A single drawable node in the scene tree.
#[derive(Debug)]
pub struct ShapeNode {
    pub id: ShapeId,
    pub kind: ShapeKind,
    /// Bounds in buffer-local space. Hit testing and painting both read
    /// this rectangle; ellipses use it as their bounding box.
    pub bounds: Rect,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    /// Invisible nodes are skipped by hit testing and painting, subtree
    /// included.
    pub visible: bool,
    /// Visual cursor hint shown while the pointer is over this shape.
    pub cursor: Option<String>,
    /// Event handlers registered on this node.
    pub subscribers: SubscriberSet,
}

impl ShapeNode {
    pub fn new(id: ShapeId, kind: ShapeKind, bounds: Rect) -> Self {
        Self {
            id,
            kind,
            bounds,
            fill: None,
            stroke: None,
            visible: true,
            cursor: None,
            subscribers: SubscriberSet::new(),
        }
    }

    /// Whether the point falls inside this shape's bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

// ─── Scene arena ─────────────────────────────────────────────────────────

/// The retained scene tree — an arena of [`ShapeNode`] values.
///
/// Mutation is limited to [`SceneArena::add_child`]; removal, reparenting
/// and z-order movement are not part of this crate's surface. Children
/// paint in insertion order, so the last-added sibling is topmost.
#[derive(Debug)]
pub struct SceneArena {
    graph: StableDiGraph<ShapeNode, ()>,
    root: NodeIndex,
    /// Index from ShapeId → NodeIndex for fast lookup.
    id_index: HashMap<ShapeId, NodeIndex>,
}

impl SceneArena {
    /// Create an empty scene with a root node.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = StableDiGraph::new();
        let root_id = ShapeId::intern("root");
        let root = graph.add_node(ShapeNode::new(root_id, ShapeKind::Root, Rect::ZERO));

        let mut id_index = HashMap::new();
        id_index.insert(root_id, root);

        Self {
            graph,
            root,
            id_index,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Add a node as a child of `parent`. Returns the new node's handle.
    pub fn add_child(&mut self, parent: NodeIndex, node: ShapeNode) -> NodeIndex {
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.graph.add_edge(parent, idx, ());
        self.id_index.insert(id, idx);
        idx
    }

    pub fn node(&self, idx: NodeIndex) -> &ShapeNode {
        &self.graph[idx]
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> &mut ShapeNode {
        &mut self.graph[idx]
    }

    /// Look up a node's handle by its id.
    pub fn index_of(&self, id: ShapeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Get the parent handle of a node.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .next()
    }

    /// Get children of a node in document (insertion) order.
    ///
    /// Sorts by `NodeIndex` so the result is deterministic regardless of
    /// how `petgraph` iterates its adjacency list on different targets.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .collect();
        children.sort();
        children
    }

    /// Register an event handler on a node. Convenience over
    /// `node_mut(idx).subscribers.on(...)`.
    pub fn on<F>(&mut self, idx: NodeIndex, kind: crate::event::EventKind, handler: F)
    where
        F: FnMut(&mut crate::event::PointerEvent) -> Result<(), crate::subscribers::HandlerError>
            + 'static,
    {
        self.graph[idx].subscribers.on(kind, handler);
    }
}

impl Default for SceneArena {
    fn default() -> Self {
        Self::new()
    }
}

//! Retained scene graph for Easel: shape arena, hit testing, per-node
//! event subscribers, and the fallible draw pass consumed by
//! `easel-surface`.

pub mod draw;
pub mod event;
pub mod hit;
pub mod id;
pub mod model;
pub mod scene;
pub mod subscribers;

pub use draw::{DrawContext, DrawError, draw_scene};
pub use event::{EventKind, EventTarget, NativeEvent, PointerEvent};
pub use hit::hit_test;
pub use id::ShapeId;
pub use model::{SceneArena, ShapeKind, ShapeNode, Stroke};
pub use scene::Scene;
pub use subscribers::{Handler, HandlerError, SubscriberSet};

// Re-export petgraph types so downstream crates don't need a direct dependency
pub use petgraph::graph::NodeIndex;

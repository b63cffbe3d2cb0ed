//! Synthetic event model.
//!
//! A [`PointerEvent`] is built fresh for every native input occurrence,
//! handed to exactly one dispatch, and discarded — never reused or pooled.
//! Its `(x, y)` is always in the surface's internal buffer space (device
//! pixels), never CSS-pixel space; the raw client coordinates ride along
//! unmodified.

use kurbo::Point;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// The scene's input event vocabulary.
///
/// Each kind is a 1:1 relabeling of a native input occurrence. The host
/// `mouseover`/`mouseout` primitives map to `Enter`/`Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Enter,
    Leave,
    Move,
    Down,
    Up,
    Click,
    DoubleClick,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl EventKind {
    /// The event's name in the scene vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Enter => "mouseenter",
            EventKind::Leave => "mouseleave",
            EventKind::Move => "mousemove",
            EventKind::Down => "mousedown",
            EventKind::Up => "mouseup",
            EventKind::Click => "click",
            EventKind::DoubleClick => "dblclick",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
        }
    }

    /// Map a host input primitive name to the scene vocabulary.
    ///
    /// `mouseover`/`mouseout` relabel to `Enter`/`Leave`; everything else is
    /// a direct rename. Returns `None` for primitives the scene does not
    /// route (keyboard, wheel, ...).
    pub fn from_host(name: &str) -> Option<Self> {
        match name {
            "mouseover" => Some(EventKind::Enter),
            "mouseout" => Some(EventKind::Leave),
            "mousemove" => Some(EventKind::Move),
            "mousedown" => Some(EventKind::Down),
            "mouseup" => Some(EventKind::Up),
            "click" => Some(EventKind::Click),
            "dblclick" => Some(EventKind::DoubleClick),
            "touchstart" => Some(EventKind::TouchStart),
            "touchmove" => Some(EventKind::TouchMove),
            "touchend" => Some(EventKind::TouchEnd),
            _ => None,
        }
    }
}

/// A native input occurrence as reported by the host, CSS-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl NativeEvent {
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// What a synthetic event is aimed at: a shape node, or the surface itself
/// when nothing was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    Surface,
    Node(NodeIndex),
}

/// A synthetic pointer event routed through the scene graph.
///
/// `target` and `current_target` are both the hit-test result (or the
/// surface); the resolved emitter receives the event but is not written
/// back into it.
#[derive(Debug)]
pub struct PointerEvent {
    pub kind: EventKind,
    /// The native occurrence this event was built from, carried verbatim.
    pub native: NativeEvent,
    pub bubbles: bool,
    pub cancelable: bool,
    /// Buffer-local x, device-pixel space.
    pub x: f64,
    /// Buffer-local y, device-pixel space.
    pub y: f64,
    pub client_x: f64,
    pub client_y: f64,
    pub target: EventTarget,
    pub current_target: EventTarget,
    propagation_stopped: bool,
}

impl PointerEvent {
    /// Build a fresh event from a native occurrence and its mapped local point.
    pub fn new(kind: EventKind, native: NativeEvent, local: Point, target: EventTarget) -> Self {
        Self {
            kind,
            native,
            bubbles: true,
            cancelable: true,
            x: local.x,
            y: local.y,
            client_x: native.client_x,
            client_y: native.client_y,
            target,
            current_target: target,
            propagation_stopped: false,
        }
    }

    /// Halt further upward emitter resolution for this event instance.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// The buffer-local position as a point.
    pub fn local(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

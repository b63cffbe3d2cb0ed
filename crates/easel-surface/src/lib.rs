//! Easel surface adapter: binds a bitmap drawing surface to a retained
//! scene graph.
//!
//! The surface owns sizing and pixel density, translates native pointer
//! input into hit-tests and bubbled synthetic events, and drives a
//! caller-paced clear-then-redraw frame loop that contains draw failures.

pub mod backend;
pub mod dispatch;
pub mod frame;
pub mod geometry;
pub mod router;
pub mod surface;

pub use backend::SurfaceBackend;
pub use dispatch::{DEFAULT_CURSOR, DispatchError};
pub use frame::FrameState;
pub use geometry::{
    ClientPoint, SurfaceConfig, SurfaceGeometry, buffer_to_client, client_to_buffer,
};
pub use router::resolve_emitter;
pub use surface::Surface;

//! Scribble Core Library
//!
//! Platform-agnostic shape model, hit-testing and pointer interaction for the
//! Scribble sketch surface. Rendering is delegated to a [`RenderBridge`].

pub mod error;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod render;
pub mod shapes;
pub mod store;
pub mod tools;

pub use error::{SketchError, SketchResult};
pub use geometry::{HIT_TOLERANCE, distance, find_shape_at, is_within_shape};
pub use input::PointerEvent;
pub use interaction::{CursorHint, Gesture, InteractionController, InteractionSession};
pub use render::RenderBridge;
pub use shapes::{Shape, ShapeId, ShapeKind, create_shape};
pub use store::ShapeStore;
pub use tools::ToolKind;

//! Render bridge abstraction.

use crate::shapes::{Shape, ShapeKind};
use kurbo::Point;
use std::fmt::Debug;

/// Trait for rendering backends.
///
/// The core never looks inside a descriptor. It only asks the bridge for one
/// when a shape is created or its corners change, and hands the whole ordered
/// shape list back whenever the store changes.
pub trait RenderBridge {
    /// Opaque per-shape render data.
    type Descriptor: Clone + Debug;

    /// Build the descriptor for a shape with the given corners.
    ///
    /// Must be deterministic for identical inputs.
    fn make_descriptor(&self, kind: ShapeKind, start: Point, end: Point) -> Self::Descriptor;

    /// Repaint the whole surface from the given snapshot.
    fn render_all(&mut self, shapes: &[Shape<Self::Descriptor>]);
}

//! Shape definitions for the sketch surface.

use crate::render::RenderBridge;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Identifier for shapes: the shape's position in creation order.
pub type ShapeId = usize;

/// Fixed set of drawable shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Ellipse,
}

impl ShapeKind {
    /// All shape kinds in tool-bar order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
    ];

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

/// A placed shape.
///
/// `start` is the anchor corner (the pointer-down point when the shape was
/// drawn) and `end` is the opposite corner. The corners are not normalized, so
/// `start` may lie below or to the right of `end`.
///
/// The descriptor is produced by the [`RenderBridge`] and is rebuilt whenever
/// a corner changes, which is why shapes are replaced rather than mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<D> {
    id: ShapeId,
    kind: ShapeKind,
    start: Point,
    end: Point,
    descriptor: D,
}

/// Create a shape, asking the bridge for its render descriptor.
pub fn create_shape<B>(
    id: ShapeId,
    start: Point,
    end: Point,
    kind: ShapeKind,
    bridge: &B,
) -> Shape<B::Descriptor>
where
    B: RenderBridge + ?Sized,
{
    Shape {
        id,
        kind,
        start,
        end,
        descriptor: bridge.make_descriptor(kind, start, end),
    }
}

impl<D> Shape<D> {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Anchor corner `(x1, y1)`.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Opposite corner `(x2, y2)`.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Opaque render descriptor.
    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }

    /// Signed width (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Signed height (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Signed extent from the anchor to the opposite corner.
    pub fn size(&self) -> Vec2 {
        self.end - self.start
    }

    /// Normalized bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// Rebuild this shape with new corners, keeping its id and kind.
    pub fn with_corners<B>(&self, start: Point, end: Point, bridge: &B) -> Shape<D>
    where
        B: RenderBridge<Descriptor = D> + ?Sized,
    {
        create_shape(self.id, start, end, self.kind, bridge)
    }
}

//! Ordered shape storage.

use crate::error::{SketchError, SketchResult};
use crate::shapes::{Shape, ShapeId};

/// Shapes in creation order, indexed by [`ShapeId`].
///
/// Shapes are only ever appended or replaced in place, so a shape's id is
/// always its index.
#[derive(Debug, Clone)]
pub struct ShapeStore<D> {
    shapes: Vec<Shape<D>>,
}

impl<D> Default for ShapeStore<D> {
    fn default() -> Self {
        Self { shapes: Vec::new() }
    }
}

impl<D> ShapeStore<D> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next appended shape will receive.
    pub fn next_id(&self) -> ShapeId {
        self.shapes.len()
    }

    /// Append a shape and return its index.
    ///
    /// The shape must carry [`next_id`](Self::next_id) as its id.
    pub fn append(&mut self, shape: Shape<D>) -> SketchResult<ShapeId> {
        let id = self.shapes.len();
        if shape.id() != id {
            return Err(SketchError::ShapeIdMismatch {
                slot: id,
                id: shape.id(),
            });
        }
        self.shapes.push(shape);
        log::debug!("Appended shape #{}", id);
        Ok(id)
    }

    /// Overwrite the shape at `id`.
    pub fn replace_at(&mut self, id: ShapeId, shape: Shape<D>) -> SketchResult<()> {
        let len = self.shapes.len();
        let slot = self
            .shapes
            .get_mut(id)
            .ok_or(SketchError::ShapeOutOfRange { id, len })?;
        if shape.id() != id {
            return Err(SketchError::ShapeIdMismatch {
                slot: id,
                id: shape.id(),
            });
        }
        *slot = shape;
        Ok(())
    }

    /// Read-only view of all shapes in order.
    pub fn snapshot(&self) -> &[Shape<D>] {
        &self.shapes
    }

    /// Get a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&Shape<D>> {
        self.shapes.get(id)
    }

    /// Most recently created shape.
    pub fn last(&self) -> Option<&Shape<D>> {
        self.shapes.last()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

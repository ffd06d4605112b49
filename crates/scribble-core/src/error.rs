//! Core error types.

use crate::shapes::ShapeId;
use thiserror::Error;

/// Errors raised by the sketch core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    #[error("Invalid tool kind: {0:?}")]
    InvalidToolKind(String),
    #[error("Shape {id} is out of range (store holds {len} shapes)")]
    ShapeOutOfRange { id: ShapeId, len: usize },
    #[error("Shape {id} cannot replace the shape in slot {slot}")]
    ShapeIdMismatch { slot: ShapeId, id: ShapeId },
}

/// Result type for core operations.
pub type SketchResult<T> = Result<T, SketchError>;

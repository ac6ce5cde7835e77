//! Error types for scene model operations

use crate::ShapeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("No shape found with ID {0}")]
    NotFound(ShapeId),

    #[error("Shape with ID {0} cannot contain other shapes")]
    NotAContainer(ShapeId),

    #[error("Unknown shape kind: {0}")]
    InvalidKind(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;

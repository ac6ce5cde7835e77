//! Command types for canvas editing

use scene_model::{Shape, ShapeId};

/// A recorded, reversible unit of canvas mutation.
///
/// Commands are fully constructed by the caller before being handed to the
/// engine; the core never reads input. Once executed a command changes
/// only through its captured shape.
#[derive(Debug, Clone)]
pub enum CanvasCommand {
    /// Add a shape to the canvas root, or inside the shape matching
    /// `parent_id` when one is given.
    Add {
        /// Prototype of the shape to add. Applying clones it into the
        /// tree, so redo can repeat the same forward effect.
        shape: Shape,
        parent_id: Option<ShapeId>,
    },
    /// Remove the first shape matching `target_id`
    Remove {
        target_id: ShapeId,
        /// The detached node, captured on a successful apply so that undo
        /// can put it back
        removed: Option<Shape>,
    },
}

impl CanvasCommand {
    /// Command adding a shape at the canvas root
    pub fn add(shape: Shape) -> Self {
        Self::Add {
            shape,
            parent_id: None,
        }
    }

    /// Command adding a shape inside the shape matching `parent_id`
    pub fn add_inside(shape: Shape, parent_id: ShapeId) -> Self {
        Self::Add {
            shape,
            parent_id: Some(parent_id),
        }
    }

    /// Command removing the first shape matching `target_id`
    pub fn remove(target_id: ShapeId) -> Self {
        Self::Remove {
            target_id,
            removed: None,
        }
    }

    /// Short name for logging
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
        }
    }
}

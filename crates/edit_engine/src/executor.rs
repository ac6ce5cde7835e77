//! Command execution engine

use crate::{CanvasCommand, EditEvent, History, Result};
use scene_model::{Canvas, SceneError};

/// The editing engine: owns the canvas and its history for one session.
///
/// All operations are synchronous and atomic with respect to the tree; a
/// command either lands completely or leaves the canvas untouched.
pub struct CanvasEngine {
    /// Current canvas tree
    canvas: Canvas,
    /// Undo/redo history
    history: History,
}

impl CanvasEngine {
    /// Create a new engine with an empty canvas
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            history: History::new(),
        }
    }

    /// Create an engine with a custom history cap
    pub fn with_history_limit(max_entries: usize) -> Self {
        Self {
            canvas: Canvas::new(),
            history: History::with_limit(max_entries),
        }
    }

    /// Get the current canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Execute a fresh command.
    ///
    /// The command occupies a history slot even when it found nothing to
    /// change; undoing such a slot degrades to a harmless no-op. Any
    /// pending redo lineage is discarded.
    pub fn execute(&mut self, mut command: CanvasCommand) -> EditEvent {
        let event = self.apply(&mut command);
        tracing::debug!(command = command.display_name(), %event, "executed");
        self.history.record(command);
        event
    }

    /// Undo the most recent command
    pub fn undo(&mut self) -> Result<EditEvent> {
        let mut command = self.history.pop_undo()?;
        let event = self.unapply(&mut command);
        tracing::debug!(command = command.display_name(), %event, "undone");
        self.history.push_redo(command);
        Ok(event)
    }

    /// Redo the most recently undone command
    pub fn redo(&mut self) -> Result<EditEvent> {
        let mut command = self.history.pop_redo()?;
        let event = self.apply(&mut command);
        tracing::debug!(command = command.display_name(), %event, "redone");
        self.history.push_undo(command);
        Ok(event)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forward effect of a command, shared by execute and redo.
    ///
    /// An add re-applied by redo targets its own parent id again; a
    /// removal re-applied by redo removes by its originally captured
    /// target id.
    fn apply(&mut self, command: &mut CanvasCommand) -> EditEvent {
        match command {
            CanvasCommand::Add { shape, parent_id } => match parent_id {
                None => {
                    let event = EditEvent::ShapeAdded {
                        kind: shape.kind(),
                        id: shape.id(),
                    };
                    self.canvas.add_shape(shape.clone());
                    event
                }
                Some(parent_id) => {
                    let parent = match self.canvas.find_by_id(*parent_id) {
                        Ok(parent) => (parent.kind(), parent.id()),
                        Err(_) => {
                            return EditEvent::ParentNotFound {
                                parent_id: *parent_id,
                            }
                        }
                    };
                    match self.canvas.add_shape_to(shape.clone(), *parent_id) {
                        Ok(()) => EditEvent::ShapeAddedInside {
                            kind: shape.kind(),
                            id: shape.id(),
                            parent_kind: parent.0,
                            parent_id: parent.1,
                        },
                        Err(SceneError::NotAContainer(id)) => {
                            EditEvent::ParentNotAContainer { parent_id: id }
                        }
                        Err(_) => EditEvent::ParentNotFound {
                            parent_id: *parent_id,
                        },
                    }
                }
            },
            CanvasCommand::Remove { target_id, removed } => {
                match self.canvas.remove_shape_by_id(*target_id) {
                    Ok(shape) => {
                        let event = EditEvent::ShapeRemoved {
                            kind: shape.kind(),
                            id: shape.id(),
                        };
                        *removed = Some(shape);
                        event
                    }
                    Err(_) => EditEvent::TargetNotFound { id: *target_id },
                }
            }
        }
    }

    /// Inverse effect of a command, used by undo.
    ///
    /// Undoing an add removes the first shape matching the added shape's
    /// id. Undoing a removal puts the captured shape back at the canvas
    /// root, not at its original parent.
    fn unapply(&mut self, command: &mut CanvasCommand) -> EditEvent {
        match command {
            CanvasCommand::Add { shape, .. } => {
                match self.canvas.remove_shape_by_id(shape.id()) {
                    Ok(removed) => EditEvent::ShapeRemoved {
                        kind: removed.kind(),
                        id: removed.id(),
                    },
                    Err(_) => EditEvent::TargetNotFound { id: shape.id() },
                }
            }
            CanvasCommand::Remove { removed, .. } => match removed {
                Some(shape) => {
                    let event = EditEvent::ShapeRestored {
                        kind: shape.kind(),
                        id: shape.id(),
                    };
                    self.canvas.add_shape(shape.clone());
                    event
                }
                None => EditEvent::NoEffect,
            },
        }
    }
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new()
    }
}

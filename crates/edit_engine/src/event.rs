//! Human-readable outcomes of engine operations

use scene_model::{ShapeId, ShapeKind};
use std::fmt;

/// Outcome of executing, undoing, or redoing a command.
///
/// The engine emits events and performs no output itself; the shell
/// renders them as text. Lookup failures are events, not errors: they are
/// reported to the operator and never abort anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// A shape was appended to the canvas root
    ShapeAdded { kind: ShapeKind, id: ShapeId },
    /// A shape was appended inside a named parent
    ShapeAddedInside {
        kind: ShapeKind,
        id: ShapeId,
        parent_kind: ShapeKind,
        parent_id: ShapeId,
    },
    /// An add found no shape matching its parent id; nothing changed
    ParentNotFound { parent_id: ShapeId },
    /// An add targeted a leaf shape that holds no children; nothing changed
    ParentNotAContainer { parent_id: ShapeId },
    /// A shape was detached from the tree
    ShapeRemoved { kind: ShapeKind, id: ShapeId },
    /// A removal found no shape matching its target id; nothing changed
    TargetNotFound { id: ShapeId },
    /// Undo put a previously removed shape back on the canvas
    ShapeRestored { kind: ShapeKind, id: ShapeId },
    /// The undone or redone command had never touched the tree
    NoEffect,
}

impl fmt::Display for EditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditEvent::ShapeAdded { kind, id } => {
                write!(f, "Shape {kind} {id} added to canvas.")
            }
            EditEvent::ShapeAddedInside {
                kind,
                id,
                parent_kind,
                parent_id,
            } => {
                write!(f, "Shape {kind} {id} added inside {parent_kind} {parent_id}.")
            }
            EditEvent::ParentNotFound { parent_id } => {
                write!(f, "No shape found with ID {parent_id}.")
            }
            EditEvent::ParentNotAContainer { parent_id } => {
                write!(f, "Shape with ID {parent_id} cannot contain other shapes.")
            }
            EditEvent::ShapeRemoved { kind, id } => {
                write!(f, "Shape {kind} {id} removed.")
            }
            EditEvent::TargetNotFound { id } => {
                write!(f, "No shape found with ID {id}.")
            }
            EditEvent::ShapeRestored { kind, id } => {
                write!(f, "Shape {kind} {id} added back.")
            }
            EditEvent::NoEffect => f.write_str("Nothing changed."),
        }
    }
}

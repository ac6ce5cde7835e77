//! Undo/redo stacks

use crate::{CanvasCommand, EditError, Result};

const DEFAULT_MAX_ENTRIES: usize = 100;

/// Holds the undo and redo stacks of executed commands.
///
/// Both are stacks with push/pop at the tail. Recording a freshly
/// executed command clears the redo stack entirely, so history stays
/// linear with no branching redo lineage.
#[derive(Debug)]
pub struct History {
    /// Commands that can be undone
    undo_stack: Vec<CanvasCommand>,
    /// Commands that can be redone
    redo_stack: Vec<CanvasCommand>,
    /// Maximum number of undo entries; the oldest is evicted beyond this
    max_entries: usize,
}

impl History {
    /// Create a new history with the default entry cap
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_ENTRIES)
    }

    /// Create with a custom entry cap
    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries,
        }
    }

    /// Record a freshly executed command. Discards any redo lineage.
    pub fn record(&mut self, command: CanvasCommand) {
        self.redo_stack.clear();
        self.undo_stack.push(command);
        while self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the most recent command for undo
    pub fn pop_undo(&mut self) -> Result<CanvasCommand> {
        self.undo_stack.pop().ok_or(EditError::UndoStackEmpty)
    }

    /// Push an undone command onto the redo stack
    pub fn push_redo(&mut self, command: CanvasCommand) {
        self.redo_stack.push(command);
    }

    /// Pop the most recently undone command for redo
    pub fn pop_redo(&mut self) -> Result<CanvasCommand> {
        self.redo_stack.pop().ok_or(EditError::RedoStackEmpty)
    }

    /// Push a replayed command back onto the undo stack. Unlike
    /// [`History::record`], this keeps the remaining redo lineage.
    pub fn push_undo(&mut self, command: CanvasCommand) {
        self.undo_stack.push(command);
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

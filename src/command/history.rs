use log::{debug, warn};

use super::{Command, CommandResult};
use crate::document::Document;
use crate::error::EditorError;

/// Manages the history of executed commands for undo/redo.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and add it to the history if successful.
    pub fn execute(&mut self, command: Command, doc: &mut Document) -> CommandResult {
        command.execute(doc)?;
        debug!("executed {}", command.label());

        if command.can_undo() {
            self.undo_stack.push(command);
            // A new action forks history; the redo branch is gone.
            self.redo_stack.clear();
        }

        Ok(())
    }

    /// Undo the last executed command.
    pub fn undo(&mut self, doc: &mut Document) -> CommandResult {
        let command = self.undo_stack.pop().ok_or(EditorError::NothingToUndo)?;
        let Some(inverse) = command.inverse(doc) else {
            warn!("no inverse for {}; dropping it from history", command.label());
            return Err(EditorError::NothingToUndo);
        };
        inverse.execute(doc)?;
        debug!("undid {}", command.label());
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the last undone command.
    pub fn redo(&mut self, doc: &mut Document) -> CommandResult {
        let command = self.redo_stack.pop().ok_or(EditorError::NothingToRedo)?;
        command.execute(doc)?;
        debug!("redid {}", command.label());
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Clear the command history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

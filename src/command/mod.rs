mod commands;
mod history;

pub use commands::Command;
pub use history::CommandHistory;

use crate::error::EditorError;

/// Result type for command operations.
pub type CommandResult = Result<(), EditorError>;

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by document and command operations.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("layer {0} is not part of this document")]
    LayerNotFound(Uuid),

    /// A document must always keep at least one layer.
    #[error("cannot remove the last remaining layer")]
    LastLayer,

    #[error("element {0} is not part of this layer")]
    ElementNotFound(usize),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

use egui::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CommandResult;
use crate::document::Document;
use crate::element::{Element, ElementKind};
use crate::error::EditorError;
use crate::layer::Layer;

/// Commands that can be executed against a document.
///
/// Commands that destroy state (`RemoveElement`, `RemoveLayer`) carry the
/// snapshot needed to invert them, captured when the command is built;
/// computing the inverse at undo time would find the state already gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Add an element on top of a layer
    AddElement {
        layer_id: Uuid,
        element: ElementKind,
    },

    /// Remove an element from a layer
    RemoveElement {
        layer_id: Uuid,
        element: ElementKind,
    },

    /// Append a new layer to the top of the stack and make it active
    AddLayer { layer: Layer },

    /// Re-insert a layer at a specific position (also used to duplicate)
    InsertLayer { index: usize, layer: Layer },

    /// Remove a layer; `layer` is the snapshot taken before removal
    RemoveLayer { index: usize, layer: Layer },

    /// Show or hide a layer
    SetLayerVisibility { layer_id: Uuid, visible: bool },

    /// Change a layer's opacity
    SetLayerOpacity {
        layer_id: Uuid,
        opacity: u8,
        previous: u8,
    },

    /// Move an element
    TranslateElement {
        layer_id: Uuid,
        element_id: usize,
        delta: Vec2,
    },

    /// Rotate an element about its own bounds center
    RotateElement {
        layer_id: Uuid,
        element_id: usize,
        angle: f32,
    },

    /// Change which layer receives new strokes (not undoable)
    SetActiveLayer { layer_id: Uuid },
}

impl Command {
    /// A short human-readable label, for history UI and logging.
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddElement { .. } => "Add Element",
            Command::RemoveElement { .. } => "Remove Element",
            Command::AddLayer { .. } => "Add Layer",
            Command::InsertLayer { .. } => "Insert Layer",
            Command::RemoveLayer { .. } => "Remove Layer",
            Command::SetLayerVisibility { .. } => "Toggle Layer Visibility",
            Command::SetLayerOpacity { .. } => "Set Layer Opacity",
            Command::TranslateElement { .. } => "Move Element",
            Command::RotateElement { .. } => "Rotate Element",
            Command::SetActiveLayer { .. } => "Select Layer",
        }
    }

    /// Execute the command against the document.
    pub fn execute(&self, doc: &mut Document) -> CommandResult {
        match self {
            Command::AddElement { layer_id, element } => {
                let layer = doc.layer_mut(*layer_id)?;
                layer.add_element(element.clone());
                Ok(())
            }

            Command::RemoveElement { layer_id, element } => {
                let layer = doc.layer_mut(*layer_id)?;
                layer
                    .remove_element(element.id())
                    .map(|_| ())
                    .ok_or(EditorError::ElementNotFound(element.id()))
            }

            Command::AddLayer { layer } => {
                let index = doc.layer_count();
                doc.insert_layer(index, layer.clone());
                doc.set_active_layer(layer.id);
                Ok(())
            }

            Command::InsertLayer { index, layer } => {
                doc.insert_layer(*index, layer.clone());
                Ok(())
            }

            Command::RemoveLayer { index: _, layer } => {
                doc.remove_layer(layer.id).map(|_| ())
            }

            Command::SetLayerVisibility { layer_id, visible } => {
                let layer = doc.layer_mut(*layer_id)?;
                layer.visible = *visible;
                Ok(())
            }

            Command::SetLayerOpacity {
                layer_id, opacity, ..
            } => {
                let layer = doc.layer_mut(*layer_id)?;
                layer.opacity = *opacity;
                Ok(())
            }

            Command::TranslateElement {
                layer_id,
                element_id,
                delta,
            } => {
                let layer = doc.layer_mut(*layer_id)?;
                let element = layer
                    .element_mut(*element_id)
                    .ok_or(EditorError::ElementNotFound(*element_id))?;
                element.translate(*delta);
                Ok(())
            }

            Command::RotateElement {
                layer_id,
                element_id,
                angle,
            } => {
                let layer = doc.layer_mut(*layer_id)?;
                let element = layer
                    .element_mut(*element_id)
                    .ok_or(EditorError::ElementNotFound(*element_id))?;
                element.rotate(*angle);
                Ok(())
            }

            Command::SetActiveLayer { layer_id } => {
                doc.set_active_layer(*layer_id);
                Ok(())
            }
        }
    }

    /// Returns true if the command participates in undo history.
    pub fn can_undo(&self) -> bool {
        !matches!(self, Command::SetActiveLayer { .. })
    }

    /// Builds the inverse command against the current document state
    /// (i.e. the state after this command executed).
    pub fn inverse(&self, doc: &Document) -> Option<Command> {
        match self {
            Command::AddElement { layer_id, element } => Some(Command::RemoveElement {
                layer_id: *layer_id,
                element: element.clone(),
            }),

            Command::RemoveElement { layer_id, element } => Some(Command::AddElement {
                layer_id: *layer_id,
                element: element.clone(),
            }),

            Command::AddLayer { layer } => {
                let index = doc.layer_index(layer.id)?;
                let snapshot = doc.layer(layer.id).ok()?.clone();
                Some(Command::RemoveLayer {
                    index,
                    layer: snapshot,
                })
            }

            Command::InsertLayer { index, layer } => {
                let snapshot = doc.layer(layer.id).ok()?.clone();
                Some(Command::RemoveLayer {
                    index: *index,
                    layer: snapshot,
                })
            }

            Command::RemoveLayer { index, layer } => Some(Command::InsertLayer {
                index: *index,
                layer: layer.clone(),
            }),

            Command::SetLayerVisibility { layer_id, visible } => {
                Some(Command::SetLayerVisibility {
                    layer_id: *layer_id,
                    visible: !visible,
                })
            }

            Command::SetLayerOpacity {
                layer_id,
                opacity,
                previous,
            } => Some(Command::SetLayerOpacity {
                layer_id: *layer_id,
                opacity: *previous,
                previous: *opacity,
            }),

            Command::TranslateElement {
                layer_id,
                element_id,
                delta,
            } => Some(Command::TranslateElement {
                layer_id: *layer_id,
                element_id: *element_id,
                delta: -*delta,
            }),

            Command::RotateElement {
                layer_id,
                element_id,
                angle,
            } => Some(Command::RotateElement {
                layer_id: *layer_id,
                element_id: *element_id,
                angle: -*angle,
            }),

            Command::SetActiveLayer { .. } => None,
        }
    }
}

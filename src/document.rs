use egui::Painter;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EditorError;
use crate::layer::Layer;

/// The layer stack of one editing session.
///
/// Invariants: the document always holds at least one layer, and the
/// active layer, when set, is always a member of the stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    layers: Vec<Layer>,
    active: Option<Uuid>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document seeded with one empty, active layer.
    pub fn new() -> Self {
        let base = Layer::new("Layer 1");
        let active = Some(base.id);
        Self {
            layers: vec![base],
            active,
        }
    }

    /// Layers in stacking order: index 0 is the bottom.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, id: Uuid) -> Result<&Layer, EditorError> {
        self.layers
            .iter()
            .find(|l| l.id == id)
            .ok_or(EditorError::LayerNotFound(id))
    }

    pub fn layer_mut(&mut self, id: Uuid) -> Result<&mut Layer, EditorError> {
        self.layers
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(EditorError::LayerNotFound(id))
    }

    pub fn layer_index(&self, id: Uuid) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Creates an empty layer on top of the stack, makes it active and
    /// returns its id.
    pub fn add_layer(&mut self, name: &str) -> Uuid {
        let layer = Layer::new(name);
        let id = layer.id;
        self.layers.push(layer);
        self.active = Some(id);
        debug!("added layer {id} ({name})");
        id
    }

    /// Re-inserts a previously removed layer at the given position.
    pub fn insert_layer(&mut self, index: usize, layer: Layer) {
        let index = index.min(self.layers.len());
        debug!("inserting layer {} at {index}", layer.id);
        self.layers.insert(index, layer);
    }

    /// Removes a layer, returning it together with the index it occupied.
    ///
    /// The last remaining layer cannot be removed. If the removed layer
    /// was active, activation falls back to the new last layer.
    pub fn remove_layer(&mut self, id: Uuid) -> Result<(Layer, usize), EditorError> {
        if self.layers.len() <= 1 {
            return Err(EditorError::LastLayer);
        }
        let index = self
            .layer_index(id)
            .ok_or(EditorError::LayerNotFound(id))?;
        let layer = self.layers.remove(index);
        if self.active == Some(id) {
            self.active = self.layers.last().map(|l| l.id);
        }
        debug!("removed layer {id} from index {index}");
        Ok((layer, index))
    }

    /// Makes the given layer active. A no-op if the id is not a member
    /// of the stack.
    pub fn set_active_layer(&mut self, id: Uuid) {
        if self.layer_index(id).is_some() {
            self.active = Some(id);
        } else {
            debug!("ignoring activation of non-member layer {id}");
        }
    }

    pub fn active_layer_id(&self) -> Option<Uuid> {
        self.active
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active.and_then(|id| self.layers.iter().find(|l| l.id == id))
    }

    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        let id = self.active?;
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Renders all layers bottom to top, skipping invisible ones.
    pub fn draw(&self, painter: &Painter) {
        for layer in &self.layers {
            if !layer.visible {
                continue;
            }
            layer.draw(painter);
        }
    }
}

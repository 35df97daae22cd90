use egui::Painter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::{Element, ElementKind};

/// A single layer: an ordered list of elements with a visibility flag
/// and a 0-255 opacity that scales every element it contains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layer {
    /// Unique identifier for the layer
    pub id: Uuid,
    /// Display name of the layer
    pub name: String,
    /// Whether the layer is currently visible
    pub visible: bool,
    /// Layer opacity, 0 (transparent) to 255 (opaque)
    pub opacity: u8,
    elements: Vec<ElementKind>,
}

impl Layer {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            visible: true,
            opacity: 255,
            elements: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[ElementKind] {
        &self.elements
    }

    /// Adds an element on top of the layer's stack.
    pub fn add_element(&mut self, element: ElementKind) {
        self.elements.push(element);
    }

    /// Removes the element with the given id, returning it if present.
    pub fn remove_element(&mut self, element_id: usize) -> Option<ElementKind> {
        let index = self.elements.iter().position(|e| e.id() == element_id)?;
        Some(self.elements.remove(index))
    }

    pub fn element(&self, element_id: usize) -> Option<&ElementKind> {
        self.elements.iter().find(|e| e.id() == element_id)
    }

    pub fn element_mut(&mut self, element_id: usize) -> Option<&mut ElementKind> {
        self.elements.iter_mut().find(|e| e.id() == element_id)
    }

    /// Topmost element containing the given position, if any.
    pub fn hit_test(&self, pos: egui::Pos2) -> Option<&ElementKind> {
        self.elements.iter().rev().find(|e| e.hit_test(pos))
    }

    /// Draws the layer's elements in stacking order, passing the layer
    /// opacity down so per-item alpha is scaled by it.
    pub fn draw(&self, painter: &Painter) {
        for element in &self.elements {
            element.draw(painter, self.opacity);
        }
    }

    /// Deep clone: a fresh layer id and independently copied elements.
    /// Mutating the duplicate never affects this layer.
    pub fn duplicate(&self) -> Layer {
        Layer {
            id: Uuid::new_v4(),
            name: format!("{} copy", self.name),
            visible: self.visible,
            opacity: self.opacity,
            elements: self.elements.clone(),
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

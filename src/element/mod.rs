use egui::{Painter, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

mod circle;
mod common;
mod freehand;
mod rect;

pub use circle::Circle;
pub use common::{Style, next_element_id, scale_opacity};
pub use freehand::Freehand;
pub use rect::RectShape;

/// Capabilities shared by every drawable element.
pub trait Element {
    /// Unique identifier for this element.
    fn id(&self) -> usize;

    /// The element variant as a string, for UI labels and logging.
    fn kind_name(&self) -> &'static str;

    /// Bounding rectangle of the element with its transform applied.
    ///
    /// The stored geometry is never mutated by a bounds query; the
    /// transform is applied to a working copy.
    fn bounds(&self) -> Rect;

    /// Draw the element. `layer_opacity` is the opacity of the owning
    /// layer and scales the element's own alpha.
    fn draw(&self, painter: &Painter, layer_opacity: u8);

    /// Test whether the given position hits the element.
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Move the element by the given delta.
    fn translate(&mut self, delta: Vec2);

    /// Rotate the element, in radians, about its own bounds center.
    fn rotate(&mut self, angle: f32);

    /// Deep clone: the copy shares no mutable geometry state with the
    /// original, so transforming it never alters this element.
    fn duplicate(&self) -> Self
    where
        Self: Sized;
}

/// Closed set of element variants.
///
/// Elements deep-clone: the freehand variant owns its path buffer, so
/// `clone()` yields geometry fully independent of the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    Freehand(Freehand),
    Circle(Circle),
    Rect(RectShape),
}

impl ElementKind {
    pub fn style(&self) -> &Style {
        match self {
            ElementKind::Freehand(e) => e.style(),
            ElementKind::Circle(e) => e.style(),
            ElementKind::Rect(e) => e.style(),
        }
    }
}

impl Element for ElementKind {
    fn id(&self) -> usize {
        match self {
            ElementKind::Freehand(e) => e.id(),
            ElementKind::Circle(e) => e.id(),
            ElementKind::Rect(e) => e.id(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            ElementKind::Freehand(e) => e.kind_name(),
            ElementKind::Circle(e) => e.kind_name(),
            ElementKind::Rect(e) => e.kind_name(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            ElementKind::Freehand(e) => e.bounds(),
            ElementKind::Circle(e) => e.bounds(),
            ElementKind::Rect(e) => e.bounds(),
        }
    }

    fn draw(&self, painter: &Painter, layer_opacity: u8) {
        match self {
            ElementKind::Freehand(e) => e.draw(painter, layer_opacity),
            ElementKind::Circle(e) => e.draw(painter, layer_opacity),
            ElementKind::Rect(e) => e.draw(painter, layer_opacity),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            ElementKind::Freehand(e) => e.hit_test(pos),
            ElementKind::Circle(e) => e.hit_test(pos),
            ElementKind::Rect(e) => e.hit_test(pos),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            ElementKind::Freehand(e) => e.translate(delta),
            ElementKind::Circle(e) => e.translate(delta),
            ElementKind::Rect(e) => e.translate(delta),
        }
    }

    fn rotate(&mut self, angle: f32) {
        match self {
            ElementKind::Freehand(e) => e.rotate(angle),
            ElementKind::Circle(e) => e.rotate(angle),
            ElementKind::Rect(e) => e.rotate(angle),
        }
    }

    fn duplicate(&self) -> Self {
        match self {
            ElementKind::Freehand(e) => ElementKind::Freehand(e.duplicate()),
            ElementKind::Circle(e) => ElementKind::Circle(e.duplicate()),
            ElementKind::Rect(e) => ElementKind::Rect(e.duplicate()),
        }
    }
}

/// Factory functions for creating elements.
pub mod factory {
    use super::*;
    use crate::geometry::Path;

    pub fn create_freehand(path: Path, style: Style) -> ElementKind {
        ElementKind::Freehand(Freehand::new(path, style))
    }

    pub fn create_circle(center: Pos2, radius: f32, style: Style) -> ElementKind {
        ElementKind::Circle(Circle::new(center, radius, style))
    }

    pub fn create_rect(rect: Rect, style: Style) -> ElementKind {
        ElementKind::Rect(RectShape::new(rect, style))
    }
}

use egui::{Painter, Pos2};
use serde::{Deserialize, Serialize};

use crate::element::{ElementKind, Style};

mod circle;
mod freehand;
mod rect;

pub use circle::CircleTool;
pub use freehand::{FREEHAND_MIN_DISTANCE, FreehandTool};
pub use rect::RectTool;

/// A per-gesture drawing strategy.
///
/// Tools are small state machines over pointer-down, pointer-move and
/// pointer-up. Transient state exists only between down and up; at
/// gesture end it is either promoted into a committed [`ElementKind`]
/// or discarded.
pub trait Tool {
    /// Return the name of the tool.
    fn name(&self) -> &'static str;

    /// Begin a gesture at `pos`, seeding the in-progress element with
    /// the given style.
    fn on_pointer_down(&mut self, pos: Pos2, style: Style);

    /// Continue the gesture.
    fn on_pointer_move(&mut self, pos: Pos2);

    /// End the gesture. Returns the finalized element, or `None` for an
    /// empty gesture (e.g. a tap), and clears the tool state.
    fn on_pointer_up(&mut self, pos: Pos2) -> Option<ElementKind>;

    /// Draw the in-progress element, if any.
    fn preview(&self, painter: &Painter);

    /// True while a gesture is in progress.
    fn is_drawing(&self) -> bool;

    /// Abandon any in-progress gesture.
    fn cancel(&mut self);
}

/// Closed set of available tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolKind {
    Freehand(FreehandTool),
    Circle(CircleTool),
    Rect(RectTool),
}

impl Default for ToolKind {
    fn default() -> Self {
        ToolKind::Freehand(FreehandTool::new())
    }
}

impl ToolKind {
    /// Names of every available tool, in panel order.
    pub fn all_names() -> &'static [&'static str] {
        &["Freehand", "Circle", "Rectangle"]
    }

    /// Factory: create a fresh tool of the named type.
    pub fn by_name(name: &str) -> Option<ToolKind> {
        match name {
            "Freehand" => Some(ToolKind::Freehand(FreehandTool::new())),
            "Circle" => Some(ToolKind::Circle(CircleTool::new())),
            "Rectangle" => Some(ToolKind::Rect(RectTool::new())),
            _ => None,
        }
    }
}

impl Tool for ToolKind {
    fn name(&self) -> &'static str {
        match self {
            ToolKind::Freehand(tool) => tool.name(),
            ToolKind::Circle(tool) => tool.name(),
            ToolKind::Rect(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, style: Style) {
        match self {
            ToolKind::Freehand(tool) => tool.on_pointer_down(pos, style),
            ToolKind::Circle(tool) => tool.on_pointer_down(pos, style),
            ToolKind::Rect(tool) => tool.on_pointer_down(pos, style),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        match self {
            ToolKind::Freehand(tool) => tool.on_pointer_move(pos),
            ToolKind::Circle(tool) => tool.on_pointer_move(pos),
            ToolKind::Rect(tool) => tool.on_pointer_move(pos),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<ElementKind> {
        match self {
            ToolKind::Freehand(tool) => tool.on_pointer_up(pos),
            ToolKind::Circle(tool) => tool.on_pointer_up(pos),
            ToolKind::Rect(tool) => tool.on_pointer_up(pos),
        }
    }

    fn preview(&self, painter: &Painter) {
        match self {
            ToolKind::Freehand(tool) => tool.preview(painter),
            ToolKind::Circle(tool) => tool.preview(painter),
            ToolKind::Rect(tool) => tool.preview(painter),
        }
    }

    fn is_drawing(&self) -> bool {
        match self {
            ToolKind::Freehand(tool) => tool.is_drawing(),
            ToolKind::Circle(tool) => tool.is_drawing(),
            ToolKind::Rect(tool) => tool.is_drawing(),
        }
    }

    fn cancel(&mut self) {
        match self {
            ToolKind::Freehand(tool) => tool.cancel(),
            ToolKind::Circle(tool) => tool.cancel(),
            ToolKind::Rect(tool) => tool.cancel(),
        }
    }
}
